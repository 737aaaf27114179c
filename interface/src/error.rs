use solana_program_error::ProgramError;

#[derive(Clone, Debug, Eq, PartialEq, strum_macros::FromRepr)]
#[repr(u8)]
pub enum GifportError {
    InvalidInstructionTag,
    InvalidAccountOwner,
    UninitializedAccount,
    MalformedAccountData,
    ItemNotFound,
}

impl From<GifportError> for ProgramError {
    #[inline(always)]
    fn from(e: GifportError) -> Self {
        ProgramError::Custom(e as u32)
    }
}

impl From<GifportError> for &'static str {
    fn from(value: GifportError) -> Self {
        match value {
            GifportError::InvalidInstructionTag => "Invalid instruction tag",
            GifportError::InvalidAccountOwner => "Account is not owned by the gifport program",
            GifportError::UninitializedAccount => "Account has not been initialized",
            GifportError::MalformedAccountData => "Account data failed to deserialize",
            GifportError::ItemNotFound => "No list item matches the given link",
        }
    }
}

impl core::fmt::Display for GifportError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let msg: &'static str = self.clone().into();
        write!(f, "{msg}")
    }
}

impl std::error::Error for GifportError {}

pub type GifportResult = Result<(), GifportError>;
