use anyhow::Result;

/// A test fixture carrying a single externally injected size parameter.
///
/// Case families attach to this as their shared base; the driver in
/// `runner` builds one fresh instance per entry of a size table and hands
/// it to the case body. The fixture holds nothing but the parameter,
/// acquires no resource, and cannot fail.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SizeFixture {
    param: usize,
}

impl SizeFixture {
    pub fn new(param: usize) -> Self {
        Self { param }
    }

    /// The parameter value this instantiation was built with, unchanged.
    #[inline]
    pub fn param(&self) -> usize {
        self.param
    }
}

/// A test case body that runs once per parameter value.
pub trait SizedCase {
    fn run(&self, fixture: &SizeFixture) -> Result<()>;
}

// Plain functions and closures of the right shape are cases too, so
// one-off cases need no struct.
impl<F> SizedCase for F
where
    F: Fn(&SizeFixture) -> Result<()>,
{
    fn run(&self, fixture: &SizeFixture) -> Result<()> {
        self(fixture)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_param_round_trip() {
        assert_eq!(SizeFixture::new(0).param(), 0);
        assert_eq!(SizeFixture::new(4096).param(), 4096);
        assert_eq!(SizeFixture::new(usize::MAX).param(), usize::MAX);
    }

    #[test]
    fn test_instances_are_independent() {
        let a = SizeFixture::new(1);
        let b = SizeFixture::new(2);
        let c = a;
        assert_eq!(a.param(), 1);
        assert_eq!(b.param(), 2);
        assert_eq!(c.param(), 1);
        assert_ne!(a, b);
    }

    #[test]
    fn test_closures_are_cases() {
        let case = |fixture: &SizeFixture| -> Result<()> {
            assert_eq!(fixture.param(), 9);
            Ok(())
        };
        assert!(case.run(&SizeFixture::new(9)).is_ok());
    }
}
