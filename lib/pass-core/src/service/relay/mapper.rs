use crate::model::completion::NotReadyReason;
use crate::model::correlation_id::CorrelationId;
use crate::service::error::ResultNotFoundError;

use super::RelayedResult;

pub(super) fn not_found<T: RelayedResult>(
    id: &CorrelationId,
    reason: NotReadyReason,
) -> ResultNotFoundError {
    ResultNotFoundError {
        id: id.to_owned(),
        reason,
        message: T::NOT_READY_MESSAGE,
    }
}
