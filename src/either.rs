/// A value that is either a failure (`Left`) or a success (`Right`)
///
/// Every parser returns an `Either`: the failure side carries a
/// [`StackTrace`](crate::error::StackTrace), the success side a
/// [`Success`](crate::state::Success). The combinators below are biased
/// towards `Right` the same way `Result` is biased towards `Ok`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Either<E, A> {
    Left(E),
    Right(A),
}

impl<E, A> Either<E, A> {
    pub fn left(value: E) -> Self {
        Either::Left(value)
    }

    pub fn right(value: A) -> Self {
        Either::Right(value)
    }

    pub fn is_left(&self) -> bool {
        matches!(self, Either::Left(_))
    }

    pub fn is_right(&self) -> bool {
        matches!(self, Either::Right(_))
    }

    /// Borrow the failure value, if any
    pub fn left_value(&self) -> Option<&E> {
        match self {
            Either::Left(e) => Some(e),
            Either::Right(_) => None,
        }
    }

    /// Borrow the success value, if any
    pub fn right_value(&self) -> Option<&A> {
        match self {
            Either::Left(_) => None,
            Either::Right(a) => Some(a),
        }
    }

    pub fn map<B, F>(self, f: F) -> Either<E, B>
    where
        F: FnOnce(A) -> B,
    {
        match self {
            Either::Left(e) => Either::Left(e),
            Either::Right(a) => Either::Right(f(a)),
        }
    }

    pub fn flat_map<B, F>(self, f: F) -> Either<E, B>
    where
        F: FnOnce(A) -> Either<E, B>,
    {
        match self {
            Either::Left(e) => Either::Left(e),
            Either::Right(a) => f(a),
        }
    }

    pub fn map_left<E2, F>(self, f: F) -> Either<E2, A>
    where
        F: FnOnce(E) -> E2,
    {
        match self {
            Either::Left(e) => Either::Left(f(e)),
            Either::Right(a) => Either::Right(a),
        }
    }

    pub fn flat_map_left<E2, F>(self, f: F) -> Either<E2, A>
    where
        F: FnOnce(E) -> Either<E2, A>,
    {
        match self {
            Either::Left(e) => f(e),
            Either::Right(a) => Either::Right(a),
        }
    }

    /// Convert into a `Result` so callers can use `?`
    pub fn into_result(self) -> Result<A, E> {
        self.into()
    }
}

/// Combine two values, short-circuiting on the first `Left`
pub fn map2<E, A, B, C, F>(ea: Either<E, A>, eb: Either<E, B>, f: F) -> Either<E, C>
where
    F: FnOnce(A, B) -> C,
{
    ea.flat_map(|a| eb.map(|b| f(a, b)))
}

impl<E, A> From<Result<A, E>> for Either<E, A> {
    fn from(result: Result<A, E>) -> Self {
        match result {
            Ok(a) => Either::Right(a),
            Err(e) => Either::Left(e),
        }
    }
}

impl<E, A> From<Either<E, A>> for Result<A, E> {
    fn from(either: Either<E, A>) -> Self {
        match either {
            Either::Left(e) => Err(e),
            Either::Right(a) => Ok(a),
        }
    }
}
