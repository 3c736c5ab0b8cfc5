use core::fmt;

/// An eagerly evaluated chain of transformations over a single value.
///
/// Every [`then`](Pipeline::then) applies its function to the current value
/// right away, exactly once, and caches the result. The pipeline also keeps
/// the composition of all stages, so the whole chain can be re-run on a fresh
/// input with [`apply`](Pipeline::apply) without touching the cached value.
///
/// # Type Parameters
///
/// * `'a` - The lifetime bounding the stages and anything they borrow
/// * `A` - The input type of the first stage
/// * `B` - The output type of the last stage
///
/// # Examples
///
/// ```
/// use outcome_rail::Pipeline;
///
/// let pipeline = Pipeline::start(2).then(|x| x + 1).then(|x| x * 10);
///
/// assert_eq!(*pipeline.get(), 30);
/// assert_eq!(pipeline.apply(5), 60);
/// assert_eq!(pipeline.stages(), 2);
/// ```
#[must_use]
pub struct Pipeline<'a, A, B> {
    composed: Box<dyn Fn(A) -> B + 'a>,
    current: B,
    stages: usize,
}

impl<'a, A> Pipeline<'a, A, A> {
    /// Seeds a pipeline with `initial`; the composition starts as the identity.
    #[inline]
    pub fn start(initial: A) -> Self {
        Self { composed: Box::new(|value| value), current: initial, stages: 0 }
    }
}

impl<'a, A, B> Pipeline<'a, A, B> {
    /// Appends a stage, evaluating it against the current value immediately.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::Pipeline;
    ///
    /// let label = Pipeline::start("42")
    ///     .then(|raw: &str| raw.parse::<u32>())
    ///     .then(|parsed| parsed.map(|n| n * 2).unwrap_or_default());
    ///
    /// assert_eq!(label.into_inner(), 84);
    /// ```
    pub fn then<C, G>(self, stage: G) -> Pipeline<'a, A, C>
    where
        A: 'a,
        B: 'a,
        G: Fn(B) -> C + 'a,
    {
        let Self { composed, current, stages } = self;
        let current = stage(current);
        Pipeline {
            composed: Box::new(move |input| stage(composed(input))),
            current,
            stages: stages + 1,
        }
    }

    /// Returns the value cached by the most recent stage.
    #[inline]
    pub fn get(&self) -> &B {
        &self.current
    }

    /// Returns a copy of the cached value converted into `R`.
    #[inline]
    pub fn get_as<R>(&self) -> R
    where
        B: Clone + Into<R>,
    {
        self.current.clone().into()
    }

    /// Consumes the pipeline, returning the cached value.
    #[inline]
    pub fn into_inner(self) -> B {
        self.current
    }

    /// Runs every stage again on `input`; the cached value is left unchanged.
    #[inline]
    pub fn apply(&self, input: A) -> B {
        (self.composed)(input)
    }

    /// Number of stages appended since [`start`](Pipeline::start).
    #[inline]
    pub fn stages(&self) -> usize {
        self.stages
    }
}

impl<A, B: fmt::Debug> fmt::Debug for Pipeline<'_, A, B> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Pipeline")
            .field("current", &self.current)
            .field("stages", &self.stages)
            .finish_non_exhaustive()
    }
}
