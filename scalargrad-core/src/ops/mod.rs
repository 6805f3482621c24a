// Forward operations of the engine. Each operation computes its numeric
// result and records a tagged node on the graph; the matching gradient rules
// live in the autograd module.
pub mod activation;
pub mod arithmetic;
