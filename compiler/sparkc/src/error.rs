use spark_eval::EvalError;
use spark_parse::ParseError;
use spark_read::ReadError;

/// Any failure along the read, parse, evaluate pipeline.
#[derive(Debug, thiserror::Error)]
pub enum SparkError {
    #[error(transparent)]
    Read(#[from] ReadError),
    #[error(transparent)]
    Parse(#[from] ParseError),
    #[error(transparent)]
    Eval(#[from] EvalError),
}

impl SparkError {
    /// The evaluation error, if evaluation was reached.
    pub fn as_eval(&self) -> Option<&EvalError> {
        match self {
            SparkError::Eval(err) => Some(err),
            _ => None,
        }
    }
}
