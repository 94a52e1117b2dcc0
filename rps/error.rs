use rps_game::InvalidMove;

#[derive(Debug)]
pub enum RpsError {
    Io(std::io::Error),

    InvalidMove(InvalidMove),
}

impl RpsError {
    pub fn exit_code(&self) -> i32 {
        match self {
            RpsError::InvalidMove(_) => 1,
            RpsError::Io(_) => 2,
        }
    }
}

impl From<std::io::Error> for RpsError {
    fn from(err: std::io::Error) -> RpsError {
        RpsError::Io(err)
    }
}

impl From<InvalidMove> for RpsError {
    fn from(err: InvalidMove) -> RpsError {
        RpsError::InvalidMove(err)
    }
}

impl std::fmt::Display for RpsError {
    fn fmt(&self, fmt: &mut std::fmt::Formatter) -> Result<(), std::fmt::Error> {
        match self {
            RpsError::Io(err) => write!(fmt, "IO error: {}", err),
            RpsError::InvalidMove(err) => write!(fmt, "{}", err),
        }
    }
}

impl std::error::Error for RpsError {}
