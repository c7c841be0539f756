//! CSV ingestion for learning-curve trials
//!
//! Each trial is stored as its own CSV table with one row per recorded step:
//!
//! ```text
//! steps,total_accuracy,at_least_3_accuracy,first_3_accuracy
//! 0,0.51,0.48,0.55
//! 10,0.62,0.60,0.64
//! ```
//!
//! [`TrialReader`] loads a numbered set of such files into a
//! [`TrialSet`](curve_core::TrialSet).
//!
//! ```rust
//! use curve_io::read_trial;
//!
//! let trial = read_trial("steps,total_accuracy,a_accuracy\n0,0.5,0.4\n10,0.9,0.8\n".as_bytes()).unwrap();
//! assert_eq!(trial.condition("a"), Some(&[0.4, 0.8][..]));
//! ```

pub mod error;
pub mod reader;

pub use error::{Error, Result};
pub use reader::{read_trial, TrialReader, ACCURACY_SUFFIX, STEPS_COLUMN};
