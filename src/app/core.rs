use crate::pipeline::classify::{Classification, ClassifyError};
use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq)]
pub enum State {
    AwaitingUpload,
    Ready {
        path: PathBuf,
    },
    Classified {
        path: PathBuf,
        result: Classification,
    },
    Error {
        message: String,
    },
}

#[derive(Debug)]
pub enum Event {
    UploadRequested,
    FilePicked(Option<PathBuf>),
    PreviewReady { path: PathBuf },
    PreviewFailed { path: PathBuf, message: String },
    ClassifyRequested,
    ClassifyDone(Result<Classification, ClassifyError>),
    ExitRequested,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    PickFile,
    DecodePreview { path: PathBuf },
    Classify { path: PathBuf },
    CloseWindow,
}

pub fn init() -> (State, Vec<Effect>) {
    (State::AwaitingUpload, vec![])
}

/// Pure transition: everything the window does is a fold of events over this
/// function. Picking a new file clears any previous result, and a failed
/// classification replaces the result rather than leaving a stale label.
pub fn transition(state: State, event: Event) -> (State, Vec<Effect>) {
    match event {
        Event::UploadRequested => (state, vec![Effect::PickFile]),

        // Cancelled picker: not an error, nothing happens.
        Event::FilePicked(None) => (state, vec![]),

        Event::FilePicked(Some(path)) => (state, vec![Effect::DecodePreview { path }]),

        Event::PreviewReady { path } => (State::Ready { path }, vec![]),

        Event::PreviewFailed { message, .. } => (State::Error { message }, vec![]),

        Event::ClassifyRequested => {
            let target = match &state {
                State::Ready { path } | State::Classified { path, .. } => Some(path.clone()),
                _ => None,
            };
            match target {
                Some(path) => (state, vec![Effect::Classify { path }]),
                None => (state, vec![]),
            }
        }

        Event::ClassifyDone(Ok(result)) => match state {
            State::Ready { path } | State::Classified { path, .. } => {
                (State::Classified { path, result }, vec![])
            }
            other => (other, vec![]),
        },

        Event::ClassifyDone(Err(error)) => (
            State::Error {
                message: error.to_string(),
            },
            vec![],
        ),

        Event::ExitRequested => (state, vec![Effect::CloseWindow]),
    }
}
