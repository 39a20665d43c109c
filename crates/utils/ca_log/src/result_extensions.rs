/// Log-and-discard helpers for results whose error is not worth propagating.
pub trait ResultExt<T, E> {
    /// Logs an error if the result is an error and returns the value, if any.
    fn ok_or_log_error(self) -> Option<T>;

    /// Log a warning if there is an `Err`, but only log the exact same message once.
    fn warn_on_err_once(self, msg: impl std::fmt::Display) -> Option<T>;
}

impl<T, E> ResultExt<T, E> for Result<T, E>
where
    E: std::fmt::Display,
{
    #[track_caller]
    fn ok_or_log_error(self) -> Option<T> {
        match self {
            Ok(value) => Some(value),
            Err(err) => {
                let loc = std::panic::Location::caller();
                log::error!("{}:{} {err}", loc.file(), loc.line());
                None
            }
        }
    }

    #[track_caller]
    fn warn_on_err_once(self, msg: impl std::fmt::Display) -> Option<T> {
        match self {
            Ok(value) => Some(value),
            Err(err) => {
                let loc = std::panic::Location::caller();
                crate::warn_once!("{}:{} {msg}: {err}", loc.file(), loc.line());
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::ResultExt as _;

    #[test]
    fn passes_values_through() {
        let ok: Result<u32, String> = Ok(3);
        assert_eq!(ok.ok_or_log_error(), Some(3));

        let err: Result<u32, String> = Err("bad shape".to_owned());
        assert_eq!(err.warn_on_err_once("reading baseline"), None);
    }
}
