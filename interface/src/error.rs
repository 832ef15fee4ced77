/// Failure modes when interpreting a program-owned account as a post.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum PostAccountError {
    UnownedAccount,
    TooShort,
    BadDiscriminator,
    MalformedPayload,
}

impl From<PostAccountError> for &'static str {
    fn from(value: PostAccountError) -> Self {
        match value {
            PostAccountError::UnownedAccount => "Account isn't owned by the post feed program",
            PostAccountError::TooShort => "Account data ends before the discriminator does",
            PostAccountError::BadDiscriminator => "Account discriminator doesn't mark a post",
            PostAccountError::MalformedPayload => "Post payload failed to deserialize",
        }
    }
}

impl core::fmt::Display for PostAccountError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.clone().into())
    }
}

impl std::error::Error for PostAccountError {}
