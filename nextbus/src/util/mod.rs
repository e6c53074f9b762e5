pub mod geo_utils;
pub mod time_utils;

#[cfg(test)]
pub mod test_server;
