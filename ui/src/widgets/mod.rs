pub mod substances;

pub use substances::{
    ERROR_HEADING, LOADING_HEADING, NEXT_LABEL, PREVIOUS_LABEL, PageAction, substances_viewer,
};
