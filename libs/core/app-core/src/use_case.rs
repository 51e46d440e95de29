use async_trait::async_trait;

/// A single application operation, e.g. "create secretariat".
///
/// Implementations orchestrate repository calls and classify domain errors;
/// they never touch transport types.
#[async_trait]
pub trait UseCase: Send + Sync {
    type Input: Send;
    type Output;
    type Error;

    async fn execute(&self, input: Self::Input) -> Result<Self::Output, Self::Error>;
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Double;

    #[async_trait]
    impl UseCase for Double {
        type Input = i32;
        type Output = i32;
        type Error = String;

        async fn execute(&self, input: i32) -> Result<i32, String> {
            input.checked_mul(2).ok_or_else(|| "overflow".to_string())
        }
    }

    #[tokio::test]
    async fn test_use_case_executes() {
        assert_eq!(Double.execute(21).await, Ok(42));
        assert!(Double.execute(i32::MAX).await.is_err());
    }
}
