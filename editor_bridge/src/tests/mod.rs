#[cfg(test)]
mod common;
#[cfg(test)]
mod test_offsets;
