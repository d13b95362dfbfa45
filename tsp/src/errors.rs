/// Display error in a user-friendly format without stack traces.
pub fn display_user_error(err: &anyhow::Error) {
    eprintln!("{}", user_error_message(err));
}

fn user_error_message(err: &anyhow::Error) -> String {
    format!("tsp: {:#}", err)
}
