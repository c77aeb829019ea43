#[cfg(test)]
mod test_config;
