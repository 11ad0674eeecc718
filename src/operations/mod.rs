//! The primitive operations.
//!
//! Every operation runs the same three-stage pipeline:
//!
//! 1. validate operand shapes (failure leaves the output untouched);
//! 2. compute a sparse intermediate `T` from the inputs with the
//!    semiring/operator;
//! 3. accumulate `T` with the output's current contents into `Z`, then
//!    commit `Z` through the mask with replace or merge semantics.
//!
//! Stages 1 and 3 live once in the crate-private `helpers` module; the
//! kernels differ only in how they compute `T`.

pub mod apply;
pub mod assign;
pub mod ewise_add;
pub mod ewise_mult;
pub mod extract;
pub(crate) mod helpers;
pub mod mxm;
pub mod mxv;
pub mod reduce;
pub mod transpose;
pub mod vxm;
