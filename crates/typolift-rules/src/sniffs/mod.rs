//! Sniff implementations

pub mod classname;
pub mod removed_class;
pub mod removed_constant_usage;
pub mod removed_function_call;
pub mod removed_global;
pub mod removed_hook;
pub mod removed_signal;
pub mod removed_typoscript;
pub mod removed_typoscript_constant;

pub use classname::{
    ClassnameDocCommentSniff, ClassnameInheritanceSniff, ClassnameInstantiationSniff,
    ClassnameStaticCallSniff, ClassnameStringSniff, ClassnameUseSniff, MissingNamespaceSniff,
};
pub use removed_class::RemovedClassSniff;
pub use removed_constant_usage::RemovedConstantUsageSniff;
pub use removed_function_call::RemovedFunctionCallSniff;
pub use removed_global::RemovedGlobalSniff;
pub use removed_hook::RemovedHookSniff;
pub use removed_signal::RemovedSignalSniff;
pub use removed_typoscript::RemovedTypoScriptSniff;
pub use removed_typoscript_constant::RemovedTypoScriptConstantSniff;
