use solana_program_error::ProgramError;

use crate::error::GifportError;

pub mod append_item;
pub mod initialize;
pub mod vote_item;

#[repr(u8)]
#[derive(Clone, Copy, Debug, PartialEq, strum_macros::Display, strum_macros::FromRepr)]
#[cfg_attr(test, derive(strum_macros::EnumIter))]
pub enum InstructionTag {
    Initialize,
    AppendItem,
    VoteItem,
}

impl TryFrom<u8> for InstructionTag {
    type Error = ProgramError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::from_repr(value).ok_or_else(|| GifportError::InvalidInstructionTag.into())
    }
}
