use std::fmt::{Debug, Display};
use unicode_normalization::UnicodeNormalization;

pub mod clock;
pub mod email;
pub mod env_vars;
pub mod test;

pub fn log_message_and_return<E: Debug, T>(
    message: &str,
    value_to_return: T,
) -> impl FnOnce(E) -> T {
    move |e| {
        log::error!("{message}\n{e:#?}");
        value_to_return
    }
}

/// Same as [log_message_and_return], for errors whose cause must be shown to the operator.
pub fn log_message_and_map<E: Debug + Display, T>(
    message: &str,
    map: impl FnOnce(String) -> T,
) -> impl FnOnce(E) -> T {
    move |e| {
        log::error!("{message}\n{e:#?}");
        map(e.to_string())
    }
}

/// Keep only the ASCII part of the compatibility decomposition of `text`.
/// Accented letters lose their marks ("José" becomes "Jose"),
/// characters without any ASCII counterpart are dropped.
pub fn normalize<T: ToString + ?Sized>(text: &T) -> String {
    text.to_string().nfkd().filter(char::is_ascii).collect()
}

#[cfg(test)]
mod tests {
    use crate::tools::{log_message_and_map, log_message_and_return, normalize};
    use parameterized::{ide, parameterized};

    ide!();

    fn init() {
        let _ = env_logger::builder().is_test(true).try_init();
    }

    #[test]
    fn should_log_error_and_message_and_return_value() {
        init();

        let expected_message = "This is a test message";
        let expected_return_value = "This is a test return value";
        let result =
            log_message_and_return(expected_message, expected_return_value)("This is an error.");

        assert_eq!(expected_return_value, result);
    }

    #[test]
    fn should_log_error_and_message_and_map_cause() {
        init();

        let result = log_message_and_map("This is a test message", |reason| {
            format!("wrapped: {reason}")
        })("This is an error.");

        assert_eq!("wrapped: This is an error.", result);
    }

    mod normalize {
        use super::*;

        #[parameterized(
            text = {"José", "María", "Ñandú Peña", "Çağla Öztürk", "John Doe", "", "東京 Ana"},
            expected_result = {"Jose", "Maria", "Nandu Pena", "Cagla Ozturk", "John Doe", "", " Ana"}
        )]
        fn should_strip_diacritics(text: &str, expected_result: &str) {
            assert_eq!(expected_result, normalize(text));
        }

        #[parameterized(
            text = {"José", "Ångström", "ﬁnal", "plain"}
        )]
        fn should_be_idempotent(text: &str) {
            let once = normalize(text);
            assert_eq!(once, normalize(&once));
        }

        #[test]
        fn should_accept_any_displayable_value() {
            assert_eq!("42", normalize(&42));
            assert_eq!("3.5", normalize(&3.5));
        }

        #[test]
        fn should_only_produce_ascii() {
            let result = normalize("Zoë, Łukasz & Søren ✓");
            assert!(result.is_ascii());
            assert_eq!("Zoe, ukasz & Sren ", result);
        }
    }
}
