//! Platform token resolution

use super::TargetPlatform;

/// Turns a raw platform token from a dependency list into a qualifier
///
/// Returning `None` treats the token as unqualified.
pub trait PlatformResolver: Send + Sync {
    fn resolve(&self, token: &str) -> Option<TargetPlatform>;
}

/// Keeps the trimmed token verbatim
#[derive(Debug, Clone, Copy, Default)]
pub struct PassThroughResolver;

impl PlatformResolver for PassThroughResolver {
    fn resolve(&self, token: &str) -> Option<TargetPlatform> {
        let token = token.trim();
        if token.is_empty() {
            None
        } else {
            Some(TargetPlatform::new(token))
        }
    }
}

impl<F> PlatformResolver for F
where
    F: Fn(&str) -> Option<TargetPlatform> + Send + Sync,
{
    fn resolve(&self, token: &str) -> Option<TargetPlatform> {
        self(token)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pass_through() {
        let resolver = PassThroughResolver;
        assert_eq!(resolver.resolve(" net40 "), Some(TargetPlatform::new("net40")));
        assert_eq!(resolver.resolve(""), None);
        assert_eq!(resolver.resolve("  "), None);
    }

    #[test]
    fn test_closure_resolver() {
        let resolver = |token: &str| Some(TargetPlatform::new(token.to_uppercase()));
        assert_eq!(resolver.resolve("sl5"), Some(TargetPlatform::new("SL5")));
    }
}
