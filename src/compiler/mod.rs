//! 编译模块：将声明式规则编译为可执行谓词集
pub mod compiled;
pub mod compiler;

pub use self::compiled::CompiledRule;
pub use self::compiler::RuleCompiler;
