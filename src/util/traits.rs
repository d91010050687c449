/// Allows any value to be moved into a [Result] without wrapping it in `Ok(..)`/`Err(..)`, which
/// keeps long builder chains readable at the end of a route.
pub trait ResultExtensions
where
    Self: Sized,
{
    fn to_ok<E>(self) -> Result<Self, E> {
        Ok(self)
    }

    fn to_err<T>(self) -> Result<T, Self> {
        Err(self)
    }
}
// Blanket impl so that every value can be wrapped with to_ok / to_err
impl<T> ResultExtensions for T {}
