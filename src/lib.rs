pub mod facility;

#[cfg(any(test, feature = "test_util"))]
pub mod test_utils;
