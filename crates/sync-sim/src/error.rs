use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SimError {
    #[error("this control is disabled while the simulation is running")]
    Running,

    #[error("the simulation is paused")]
    NotRunning,
}

pub type SimResult<T> = Result<T, SimError>;
