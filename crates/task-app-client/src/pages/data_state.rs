use futures::channel::oneshot;
use tracing::error;

#[derive(Debug)]
pub struct AwaitingType<T>(pub oneshot::Receiver<anyhow::Result<T>>);

#[derive(Debug, Default)]
pub enum DataState<T> {
    #[default]
    None,
    AwaitingResponse(AwaitingType<T>),
    Present(T),
    Failed(String),
}

/// What a poll of an in-flight save reported
#[must_use]
#[derive(Debug)]
pub enum SaveOutcome<T> {
    Ongoing,
    Completed(T),
    Failed(String),
}

impl<T> DataState<T> {
    /// Attempts to load the data
    ///
    /// Some branches lead to no UI being displayed, in particular when the data
    /// is received or an error is received If a ui is passed then spinners
    /// and error messages will show as applicable
    ///
    /// Note: F needs to return AwaitingType<T> and not T because it needs to be
    /// able to be pending and T is not
    ///
    /// # PANIC
    /// Panics if the data is already present
    pub fn get<F>(&mut self, ui: Option<&mut egui::Ui>, retry_msg: Option<&str>, fetch_fn: F)
    where
        F: FnOnce() -> AwaitingType<T>,
    {
        match self {
            DataState::None => {
                if let Some(ui) = ui {
                    ui.spinner();
                }
                let rx = fetch_fn();
                *self = DataState::AwaitingResponse(rx);
            }
            DataState::AwaitingResponse(rx) => {
                if let Some(new_state) = Self::await_data(ui, rx) {
                    *self = new_state;
                }
            }
            DataState::Present(_data) => {
                // Panic because only reason I can think of that code got here is that there is
                // a bug in the calling code
                panic!("precondition not satisfied: Data is already present")
            }
            DataState::Failed(e) => {
                if let Some(ui) = ui {
                    ui.colored_label(ui.visuals().error_fg_color, format!("Request failed: {e}"));
                    if ui.button(retry_msg.unwrap_or("Retry Request")).clicked() {
                        *self = DataState::default();
                    }
                }
            }
        }
    }

    pub fn await_data(ui: Option<&mut egui::Ui>, rx: &mut AwaitingType<T>) -> Option<Self> {
        Some(match rx.0.try_recv() {
            Ok(recv_opt) => match recv_opt {
                Some(outcome_result) => match outcome_result {
                    Ok(data) => DataState::Present(data),
                    Err(e) => {
                        let err_msg = format!("error: {e}");
                        error!(err_msg, "Error response received instead of the data");
                        DataState::Failed(err_msg)
                    }
                },
                None => {
                    if let Some(ui) = ui {
                        ui.spinner();
                    }
                    return None;
                }
            },
            Err(e) => {
                let err_msg = format!("Error receiving on channel. Error: {e:?}");
                error!(err_msg, "Error receiving on channel");
                DataState::Failed(err_msg)
            }
        })
    }

    /// Polls an in-flight save, consuming the terminal states so the page can
    /// react to the outcome exactly once and go back to idle
    pub fn poll_save(&mut self) -> Option<SaveOutcome<T>> {
        match self {
            DataState::None => None,
            DataState::AwaitingResponse(rx) => {
                if let Some(new_state) = Self::await_data(None, rx) {
                    *self = new_state;
                }
                Some(SaveOutcome::Ongoing)
            }
            DataState::Present(_) => match std::mem::replace(self, DataState::None) {
                DataState::Present(data) => Some(SaveOutcome::Completed(data)),
                _ => unreachable!("matched Present above"),
            },
            DataState::Failed(_) => match std::mem::replace(self, DataState::None) {
                DataState::Failed(e) => Some(SaveOutcome::Failed(e)),
                _ => unreachable!("matched Failed above"),
            },
        }
    }

    /// Returns `true` if the data state is [`Present`].
    ///
    /// [`Present`]: DataState::Present
    #[must_use]
    pub fn is_present(&self) -> bool {
        matches!(self, Self::Present(..))
    }

    /// Returns `true` if the data state is [`None`].
    ///
    /// [`None`]: DataState::None
    #[must_use]
    pub fn is_none(&self) -> bool {
        matches!(self, Self::None)
    }
}

impl<T> AsRef<DataState<T>> for DataState<T> {
    fn as_ref(&self) -> &DataState<T> {
        self
    }
}

impl<T> AsMut<DataState<T>> for DataState<T> {
    fn as_mut(&mut self) -> &mut DataState<T> {
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::anyhow;

    #[test]
    fn completed_save_is_reported_exactly_once() {
        // Arrange
        let (tx, rx) = oneshot::channel();
        let mut state: DataState<&str> = DataState::AwaitingResponse(AwaitingType(rx));
        tx.send(Ok("saved")).unwrap();

        // Act - the receive lands on the first poll, the outcome on the second
        let first = state.poll_save();
        let second = state.poll_save();
        let third = state.poll_save();

        // Assert
        assert!(matches!(first, Some(SaveOutcome::Ongoing)));
        assert!(matches!(second, Some(SaveOutcome::Completed("saved"))));
        assert!(third.is_none(), "state should be back to idle");
    }

    #[test]
    fn failed_save_is_reported_with_the_error_text() {
        // Arrange
        let (tx, rx) = oneshot::channel::<anyhow::Result<()>>();
        let mut state = DataState::AwaitingResponse(AwaitingType(rx));
        tx.send(Err(anyhow!("title must not be empty"))).unwrap();

        // Act
        let _ = state.poll_save();
        let outcome = state.poll_save();

        // Assert
        match outcome {
            Some(SaveOutcome::Failed(msg)) => assert!(msg.contains("title must not be empty")),
            other => panic!("expected a failed outcome but got: {other:?}"),
        }
        assert!(state.poll_save().is_none(), "state should be back to idle");
    }

    #[test]
    fn dropped_sender_fails_the_save() {
        // Arrange
        let (tx, rx) = oneshot::channel::<anyhow::Result<()>>();
        let mut state = DataState::AwaitingResponse(AwaitingType(rx));
        drop(tx);

        // Act
        let _ = state.poll_save();
        let outcome = state.poll_save();

        // Assert
        assert!(matches!(outcome, Some(SaveOutcome::Failed(_))));
    }
}
