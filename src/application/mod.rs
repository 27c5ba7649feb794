pub mod services;
pub mod usecases;

#[cfg(test)]
pub(crate) mod test_support;
