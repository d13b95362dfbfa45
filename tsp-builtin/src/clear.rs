use super::StartpageProxy;
use tsp_types::ExitStatus;

pub fn command(_argv: Vec<String>, proxy: &mut dyn StartpageProxy) -> ExitStatus {
    proxy.clear_output();
    ExitStatus::success()
}
