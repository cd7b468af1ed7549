/// Builds an error message tagged with the location it was raised at and logs
/// it. Evaluates to the message so it can be stored for display.
#[macro_export]
macro_rules! internal_error {
    ($arg: expr) => {{
        let internal_error_msg = format!(
            "{}\ninternal error: {}:{}:{}",
            $arg,
            file!(),
            line!(),
            column!()
        );
        tracing::error!(?internal_error_msg);
        internal_error_msg
    }};
}

/// Use this version if we know that under normal operation this can happen but
/// we wish to monitor it (for example the storage directory being read only)
#[macro_export]
macro_rules! log_err_as_warn {
    ($arg: expr) => {
        if let Err(mishap) = $arg {
            tracing::warn!(?mishap);
        }
    };
    ($arg: expr, $msg: literal) => {
        if let Err(mishap) = $arg {
            tracing::warn!(?mishap, $msg);
        }
    };
}
