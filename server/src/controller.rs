use std::future::IntoFuture;
use std::marker::PhantomData;

// Original: https://github.com/HalsekiRaika/architectured/blob/e5caa5c7ae801d1aaac6e275b3ea0ef26d6ff26b/server/src/controller.rs

/// Turns a request shape `I` into the DTO the application layer consumes.
pub trait Intake<I>: 'static + Sync + Send {
    type To;
    fn emit(&self, input: I) -> Self::To;
}

/// Turns an application result `I` into something the route can respond with.
pub trait Exhaust<I>: 'static + Sync + Send {
    type To;
    fn emit(&self, input: I) -> Self::To;
}

/// Request → DTO → service call → response pipeline used by every route.
pub struct Controller<T, P, I, D, O> {
    transformer: T,
    presenter: P,
    _marker: PhantomData<fn(I) -> (D, O)>,
}

impl<T, P, I, D, O> Controller<T, P, I, D, O> {
    pub fn new(transformer: T, presenter: P) -> Self {
        Self {
            transformer,
            presenter,
            _marker: PhantomData,
        }
    }
}

impl<T, P, I, D, O> Controller<T, P, I, D, O>
where
    T: Intake<I, To = D>,
{
    pub fn intake(self, input: I) -> Transformed<P, D, O> {
        Transformed {
            transformed: self.transformer.emit(input),
            presenter: self.presenter,
            _marker: PhantomData,
        }
    }
}

pub struct Transformed<P, D, O> {
    transformed: D,
    presenter: P,
    _marker: PhantomData<fn() -> O>,
}

impl<P, D, O> Transformed<P, D, O>
where
    P: Exhaust<O>,
{
    pub async fn handle<F, Fut, E>(self, f: F) -> Result<P::To, E>
    where
        F: FnOnce(D) -> Fut,
        Fut: IntoFuture<Output = Result<O, E>>,
    {
        let output = f(self.transformed).await?;
        Ok(self.presenter.emit(output))
    }
}

impl<D> Transformed<(), D, ()> {
    /// Runs `f` without presenting its output, for calls whose response does not
    /// depend on what the service returns.
    pub async fn bypass<F, Fut, E>(self, f: F) -> Result<(), E>
    where
        F: FnOnce(D) -> Fut,
        Fut: IntoFuture<Output = Result<(), E>>,
    {
        f(self.transformed).await
    }
}

#[cfg(test)]
mod test {
    use super::*;

    struct Doubler;

    impl Intake<i32> for Doubler {
        type To = i64;
        fn emit(&self, input: i32) -> i64 {
            i64::from(input) * 2
        }
    }

    struct Stringify;

    impl Exhaust<i64> for Stringify {
        type To = String;
        fn emit(&self, input: i64) -> String {
            input.to_string()
        }
    }

    #[tokio::test]
    async fn handle_runs_transformer_then_presenter() {
        let result: Result<String, ()> = Controller::new(Doubler, Stringify)
            .intake(21)
            .handle(|dto| async move { Ok(dto + 1) })
            .await;
        assert_eq!(result, Ok("43".to_string()));
    }

    #[tokio::test]
    async fn handle_short_circuits_on_error() {
        let result: Result<String, &str> = Controller::new(Doubler, Stringify)
            .intake(1)
            .handle(|_| async move { Err::<i64, _>("failed") })
            .await;
        assert_eq!(result, Err("failed"));
    }

    #[tokio::test]
    async fn bypass_skips_presenter() {
        let result: Result<(), &str> = Controller::new(Doubler, ())
            .intake(1)
            .bypass(|dto| async move {
                assert_eq!(dto, 2);
                Ok(())
            })
            .await;
        assert_eq!(result, Ok(()));
    }
}
