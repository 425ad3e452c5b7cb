#[cfg(test)]
use std::cell::RefCell;
#[cfg(test)]
use std::collections::HashMap;

/// Retrieve the value of an environment variable.
/// A blank value is considered as missing.
///
/// /!\ As this works on global variables,
/// a function using `retrieve_env_var` could be tricky to test.
/// To do so, wrap your test with `with_env_vars(vars, fn)`.
/// This function is only available in a test context.
pub fn retrieve_env_var(name: &str) -> Option<String> {
    get_env_var(name)
        .map(|value| value.trim().to_owned())
        .filter(|value| !value.is_empty())
}

/// Retrieve an environment variable that must be set.
pub fn retrieve_expected_env_var<E>(name: &str, error_if_missing: E) -> Result<String, E> {
    retrieve_env_var(name).ok_or(error_if_missing)
}

/// Retrieve an environment variable, or the default value if it is missing.
pub fn retrieve_env_var_or(name: &str, default: &str) -> String {
    retrieve_env_var(name).unwrap_or_else(|| default.to_owned())
}

#[cfg(not(test))]
fn get_env_var(name: &str) -> Option<String> {
    std::env::var(name).ok()
}

#[cfg(test)]
thread_local! {
    /// A mutable map to host environment variables for tests.
    /// When a test is run with `with_env_vars`,
    /// the inner map is set to whatever param is passed.
    /// It is then reset to its previous state.
    static ENV_VARS: RefCell<HashMap<String, String>> = RefCell::new(HashMap::new());
}

#[cfg(test)]
fn get_env_var(name: &str) -> Option<String> {
    ENV_VARS.with(|vars| vars.borrow().get(name).cloned())
}

#[cfg(test)]
/// When running tests, the process environment is never read.
/// Set up the variables a test needs by wrapping it with this function.
pub fn with_env_vars<F, T>(vars: Vec<(&str, &str)>, function: F) -> T
where
    F: FnOnce() -> T,
{
    ENV_VARS.with(|refcell| {
        let vars = vars
            .into_iter()
            .map(|(name, value)| (name.to_owned(), value.to_owned()))
            .collect();
        let old_value = refcell.replace(vars);
        let result = function();
        refcell.replace(old_value);
        result
    })
}
