//! Ready-to-use instantiation of [`crate::impl_proof_of_knowledge_of_discrete_log`]
//! for callers that don't need a distinctly-named pair of types.

use ark_serialize::CanonicalSerialize;

crate::impl_proof_of_knowledge_of_discrete_log!(PoKDiscreteLog, PoKDiscreteLogProof);
