//! Shader error taxonomy and the failure policy.
//!
//! The GL wrappers live in the client; this module holds what can be reasoned about without a
//! driver: which stage failed, the diagnostic text, and what to do about it.

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A programmable pipeline stage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShaderStage {
    Vertex,
    Fragment,
}

impl fmt::Display for ShaderStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ShaderStage::Vertex => f.write_str("vertex"),
            ShaderStage::Fragment => f.write_str("fragment"),
        }
    }
}

/// Errors raised while building a shader program.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ShaderError {
    #[error("{stage} shader failed to compile: {log}")]
    Compile { stage: ShaderStage, log: String },

    #[error("shader program failed to link: {log}")]
    Link { log: String },

    #[error("driver could not create {object}: {reason}")]
    Resource { object: &'static str, reason: String },
}

impl ShaderError {
    /// A compile error. An empty driver log is replaced so the diagnostic is never blank.
    pub fn compile(stage: ShaderStage, log: impl Into<String>) -> Self {
        let log = non_empty(log.into(), || format!("the driver gave no log for the {stage} stage"));
        ShaderError::Compile { stage, log }
    }

    /// A link error. An empty driver log is replaced so the diagnostic is never blank.
    pub fn link(log: impl Into<String>) -> Self {
        let log = non_empty(log.into(), || "the driver gave no link log".to_string());
        ShaderError::Link { log }
    }

    /// The diagnostic text carried by the error.
    pub fn diagnostic(&self) -> &str {
        match self {
            ShaderError::Compile { log, .. } | ShaderError::Link { log } => log,
            ShaderError::Resource { reason, .. } => reason,
        }
    }
}

fn non_empty(log: String, placeholder: impl FnOnce() -> String) -> String {
    let trimmed = log.trim();
    if trimmed.is_empty() {
        placeholder()
    } else {
        trimmed.to_string()
    }
}

/// What to do when an exercise's shader program cannot be built.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ShaderPolicy {
    /// Log the diagnostic and draw with the built-in fallback program.
    #[default]
    Fallback,
    /// Abort startup.
    Strict,
}

impl ShaderPolicy {
    /// Resolves the outcome of building the program called `name`.
    ///
    /// Under [`ShaderPolicy::Fallback`] a failure is logged and `fallback` is tried instead; an
    /// error from the fallback itself is returned as-is.
    pub fn resolve<T>(
        self,
        name: &str,
        result: Result<T, ShaderError>,
        fallback: impl FnOnce() -> Result<T, ShaderError>,
    ) -> Result<T, ShaderError> {
        match (self, result) {
            (_, Ok(program)) => Ok(program),
            (ShaderPolicy::Strict, Err(err)) => {
                log::error!("Shader program '{}' failed: {}", name, err);
                Err(err)
            }
            (ShaderPolicy::Fallback, Err(err)) => {
                log::error!("Shader program '{}' failed: {}", name, err);
                log::warn!("Using the fallback shader for '{}'", name);
                fallback()
            }
        }
    }
}

/// Vertex stage of the fallback program. Positions pass through untransformed.
pub const FALLBACK_VERTEX_SOURCE: &str = "#version 330 core
layout(location = 0) in vec3 position;
void main() {
    gl_Position = vec4(position, 1.0);
}
";

/// Fragment stage of the fallback program: flat magenta, hard to miss.
pub const FALLBACK_FRAGMENT_SOURCE: &str = "#version 330 core
out vec4 fragment_color;
void main() {
    fragment_color = vec4(1.0, 0.0, 1.0, 1.0);
}
";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_diagnostics_are_never_empty() {
        let err = ShaderError::compile(ShaderStage::Fragment, "  \n");
        assert!(!err.diagnostic().is_empty());
        assert!(err.diagnostic().contains("fragment"));

        let err = ShaderError::link("");
        assert!(!err.diagnostic().is_empty());
    }

    #[test]
    fn test_driver_log_is_kept() {
        let err = ShaderError::compile(
            ShaderStage::Vertex,
            "0:3(1): error: syntax error, unexpected IDENTIFIER\n",
        );
        assert_eq!(
            err.diagnostic(),
            "0:3(1): error: syntax error, unexpected IDENTIFIER"
        );
        assert_eq!(
            err.to_string(),
            "vertex shader failed to compile: 0:3(1): error: syntax error, unexpected IDENTIFIER"
        );
    }

    #[test]
    fn test_fallback_policy_substitutes() {
        let failed: Result<u32, _> = Err(ShaderError::link("mismatched varyings"));
        let resolved = ShaderPolicy::Fallback.resolve("broken", failed, || Ok(7));
        assert_eq!(resolved, Ok(7));
    }

    #[test]
    fn test_strict_policy_propagates() {
        let failed: Result<u32, _> = Err(ShaderError::link("mismatched varyings"));
        let resolved = ShaderPolicy::Strict.resolve("broken", failed, || Ok(7));
        assert_eq!(resolved, Err(ShaderError::link("mismatched varyings")));
    }

    #[test]
    fn test_success_skips_fallback() {
        let resolved = ShaderPolicy::Fallback.resolve("fine", Ok(1u32), || {
            panic!("fallback must not be built")
        });
        assert_eq!(resolved, Ok(1));
    }

    #[test]
    fn test_failing_fallback_is_an_error() {
        let failed: Result<u32, _> = Err(ShaderError::link("first"));
        let resolved = ShaderPolicy::Fallback.resolve("broken", failed, || {
            Err(ShaderError::compile(ShaderStage::Vertex, "second"))
        });
        assert!(resolved.is_err());
    }

    #[test]
    fn test_policy_serde() {
        assert_eq!(
            serde_json::from_str::<ShaderPolicy>("\"strict\"").unwrap(),
            ShaderPolicy::Strict
        );
        assert_eq!(serde_json::to_string(&ShaderPolicy::Fallback).unwrap(), "\"fallback\"");
    }
}
