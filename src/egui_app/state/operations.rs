/// How an operation ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Outcome {
    Success,
    Failure,
}

/// Progress of one kind of remote operation.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OperationState {
    #[default]
    Idle,
    InFlight,
    Settled(Outcome),
}

impl OperationState {
    pub fn is_in_flight(self) -> bool {
        matches!(self, OperationState::InFlight)
    }
}

/// Per-operation progress flags.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct OperationsState {
    pub fetch_models: OperationState,
    pub fetch_metrics: OperationState,
    pub train: OperationState,
    pub predict: OperationState,
}

impl OperationsState {
    /// Training or prediction still waiting on the service. Catalog and
    /// metrics fetches report through their own fields.
    pub fn is_loading(&self) -> bool {
        [self.train, self.predict]
            .into_iter()
            .any(OperationState::is_in_flight)
    }
}
