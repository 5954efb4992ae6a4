use std::fmt::Display;

pub trait LogErr<T> {
    /// Log the error and carry on without the value.
    fn log_err(self, what: &str) -> Option<T>;
}

impl<T, E: Display> LogErr<T> for Result<T, E> {
    fn log_err(self, what: &str) -> Option<T> {
        self.inspect_err(|e| tracing::warn!(error = %e, "{what} failed"))
            .ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keeps_ok_and_drops_err() {
        assert_eq!(Ok::<_, String>(3).log_err("count"), Some(3));
        assert_eq!(Err::<u8, _>("boom").log_err("count"), None);
    }
}
