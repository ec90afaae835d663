use ark_serialize::SerializationError;

#[derive(thiserror::Error, Debug)]
pub enum SchnorrError {
    #[error("serialization error: {0}")]
    Serialization(#[from] SerializationError),
}
