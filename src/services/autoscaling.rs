//! EC2 Auto Scaling example: change a group's desired capacity and wait for the
//! in-service instance count to catch up.

use async_trait::async_trait;
use aws_config::SdkConfig;
use aws_sdk_autoscaling::Client;
use aws_sdk_autoscaling::types::LifecycleState;
use tracing::info;

use super::require;
use crate::core::config::PollSettings;
use crate::errors::ExampleError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GroupCapacity {
    pub desired: i32,
    pub in_service: usize,
}

impl GroupCapacity {
    #[must_use]
    pub fn is_settled(&self) -> bool {
        usize::try_from(self.desired).is_ok_and(|desired| desired == self.in_service)
    }
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AutoScalingApi: Send + Sync {
    async fn set_desired_capacity(&self, group: &str, capacity: i32) -> Result<(), ExampleError>;

    /// `None` when no group has that name.
    async fn describe_group(&self, group: &str) -> Result<Option<GroupCapacity>, ExampleError>;
}

pub struct AutoScalingClient {
    inner: Client,
}

impl AutoScalingClient {
    #[must_use]
    pub fn new(config: &SdkConfig) -> Self {
        Self {
            inner: Client::new(config),
        }
    }
}

#[async_trait]
impl AutoScalingApi for AutoScalingClient {
    async fn set_desired_capacity(&self, group: &str, capacity: i32) -> Result<(), ExampleError> {
        self.inner
            .set_desired_capacity()
            .auto_scaling_group_name(group)
            .desired_capacity(capacity)
            .honor_cooldown(false)
            .send()
            .await?;
        Ok(())
    }

    async fn describe_group(&self, group: &str) -> Result<Option<GroupCapacity>, ExampleError> {
        let resp = self
            .inner
            .describe_auto_scaling_groups()
            .auto_scaling_group_names(group)
            .send()
            .await?;
        Ok(resp.auto_scaling_groups().first().map(|g| GroupCapacity {
            desired: g.desired_capacity().unwrap_or_default(),
            in_service: g
                .instances()
                .iter()
                .filter(|i| i.lifecycle_state() == Some(&LifecycleState::InService))
                .count(),
        }))
    }
}

/// # Errors
///
/// Returns an error if the group name is empty, the capacity is negative, or the
/// call fails.
pub async fn set_desired_capacity<C: AutoScalingApi + ?Sized>(
    autoscaling: &C,
    group: &str,
    capacity: i32,
) -> Result<(), ExampleError> {
    require("group name", group)?;
    if capacity < 0 {
        return Err(ExampleError::InvalidInput(format!(
            "capacity must not be negative, got {capacity}"
        )));
    }
    autoscaling.set_desired_capacity(group, capacity).await?;
    info!(group, capacity, "Requested new desired capacity");
    Ok(())
}

/// Poll the group until its in-service instance count equals its desired capacity.
///
/// # Errors
///
/// Returns `NotFound` if the group does not exist, or `Timeout` once the attempt
/// budget runs out.
pub async fn wait_for_capacity<C: AutoScalingApi + ?Sized>(
    autoscaling: &C,
    group: &str,
    poll: PollSettings,
) -> Result<GroupCapacity, ExampleError> {
    require("group name", group)?;
    for attempt in 1..=poll.max_attempts {
        let capacity = autoscaling
            .describe_group(group)
            .await?
            .ok_or_else(|| ExampleError::NotFound(format!("Auto Scaling group {group}")))?;
        if capacity.is_settled() {
            return Ok(capacity);
        }
        info!(
            group,
            attempt,
            desired = capacity.desired,
            in_service = capacity.in_service,
            "Waiting for instances"
        );
        if attempt < poll.max_attempts {
            tokio::time::sleep(poll.interval).await;
        }
    }
    Err(ExampleError::Timeout {
        what: format!("group {group} to reach its desired capacity"),
        attempts: poll.max_attempts,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockall::Sequence;
    use std::time::Duration;

    fn fast_poll(max_attempts: u32) -> PollSettings {
        PollSettings {
            interval: Duration::ZERO,
            max_attempts,
        }
    }

    #[tokio::test]
    async fn test_set_desired_capacity_passes_group_and_count() {
        let mut mock = MockAutoScalingApi::new();
        mock.expect_set_desired_capacity()
            .withf(|group: &str, capacity: &i32| group == "web-asg" && *capacity == 3)
            .times(1)
            .returning(|_, _| Ok(()));

        set_desired_capacity(&mock, "web-asg", 3).await.unwrap();
    }

    #[tokio::test]
    async fn test_set_desired_capacity_rejects_negative() {
        let mut mock = MockAutoScalingApi::new();
        mock.expect_set_desired_capacity().times(0);

        let err = set_desired_capacity(&mock, "web-asg", -1).await.unwrap_err();
        assert!(matches!(err, ExampleError::InvalidInput(_)));
    }

    #[tokio::test]
    async fn test_wait_for_capacity_stops_when_settled() {
        let mut mock = MockAutoScalingApi::new();
        let mut seq = Sequence::new();
        mock.expect_describe_group()
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_| {
                Ok(Some(GroupCapacity {
                    desired: 2,
                    in_service: 1,
                }))
            });
        mock.expect_describe_group()
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_| {
                Ok(Some(GroupCapacity {
                    desired: 2,
                    in_service: 2,
                }))
            });

        let capacity = wait_for_capacity(&mock, "web-asg", fast_poll(10)).await.unwrap();
        assert_eq!(capacity.in_service, 2);
    }

    #[tokio::test]
    async fn test_wait_for_capacity_unknown_group() {
        let mut mock = MockAutoScalingApi::new();
        mock.expect_describe_group().times(1).returning(|_| Ok(None));

        let err = wait_for_capacity(&mock, "ghost", fast_poll(10)).await.unwrap_err();
        assert!(matches!(err, ExampleError::NotFound(_)));
    }

    #[tokio::test]
    async fn test_wait_for_capacity_times_out() {
        let mut mock = MockAutoScalingApi::new();
        mock.expect_describe_group().times(2).returning(|_| {
            Ok(Some(GroupCapacity {
                desired: 4,
                in_service: 0,
            }))
        });

        let err = wait_for_capacity(&mock, "web-asg", fast_poll(2)).await.unwrap_err();
        assert!(matches!(err, ExampleError::Timeout { attempts: 2, .. }));
    }

    #[test]
    fn test_zero_capacity_with_no_instances_is_settled() {
        let capacity = GroupCapacity {
            desired: 0,
            in_service: 0,
        };
        assert!(capacity.is_settled());
    }
}
