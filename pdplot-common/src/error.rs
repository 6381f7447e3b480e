use thiserror::Error;

#[derive(Error, Debug)]
pub enum StyleValueError {
    #[error("css color parse error: {0}")]
    InvalidColor(#[from] csscolorparser::ParseColorError),

    #[error("Unsupported color form {0:?}, expected #RRGGBB or rgb(a)(...)")]
    UnsupportedColorForm(String),

    #[error("Number {0} has no JSON representation")]
    NonFiniteNumber(f64),

    #[error("Empty colorscale")]
    EmptyColorscale,

    #[error("Colorscale stop position {0} is outside [0, 1]")]
    StopOutOfRange(f64),

    #[error("Colorscale stops must be in ascending order: {0:?}")]
    StopsNotAscending(Vec<f64>),

    #[error("Colorscale must start at 0.0 and end at 1.0, found {first}..{last}")]
    OpenEndedColorscale { first: f64, last: f64 },
}
