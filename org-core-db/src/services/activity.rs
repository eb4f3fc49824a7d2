use std::sync::Arc;

use anyhow::anyhow;
use chrono::Utc;
use heapless::String as HeaplessString;
use org_core_api::{ErrorReporter, Principal, TemplateResolver};
use uuid::Uuid;

use crate::models::activity::activity_entry::ActivityEntryModel;
use crate::models::activity::activity_event::ActivityEvent;
use crate::models::identifiable::Identifiable;
use crate::models::tracked::ActivityTracked;
use crate::repository::append_activity::AppendActivity;
use crate::services::changes::determine_changes;
use crate::utils::{hash_as_i64, headline_case, ksort_recursive};

/// Channel tag recorded on every entry this logger produces.
pub const DEFAULT_LOG_NAME: &str = "default";

/// Template namespace for activity descriptions.
const TEMPLATE_NAMESPACE: &str = "activity";

/// Records one activity entry per observed lifecycle transition with a
/// non-empty change set.
///
/// Everything behind [`Self::log_model_activity`] sits inside a failure
/// boundary: a missing principal, a diff failure, or a persistence failure
/// is reported to the error sink and swallowed. Logging never aborts or
/// rolls back the lifecycle transition that triggered it.
pub struct ActivityLogger<A> {
    entries: Arc<A>,
    reporter: Arc<dyn ErrorReporter>,
    templates: Arc<dyn TemplateResolver>,
}

impl<A: AppendActivity> ActivityLogger<A> {
    pub fn new(
        entries: Arc<A>,
        reporter: Arc<dyn ErrorReporter>,
        templates: Arc<dyn TemplateResolver>,
    ) -> Self {
        Self {
            entries,
            reporter,
            templates,
        }
    }

    /// Records the transition, returning the persisted entry, or None when
    /// there was nothing to record (empty diff) or the attempt failed and
    /// was reported.
    pub async fn log_model_activity<T: ActivityTracked>(
        &self,
        subject: &T,
        original: Option<&T>,
        event: ActivityEvent,
        principal: Option<&Principal>,
    ) -> Option<ActivityEntryModel> {
        match self.record(subject, original, event, principal).await {
            Ok(entry) => entry,
            Err(error) => {
                self.reporter.report("activity_log", &error);
                None
            }
        }
    }

    async fn record<T: ActivityTracked>(
        &self,
        subject: &T,
        original: Option<&T>,
        event: ActivityEvent,
        principal: Option<&Principal>,
    ) -> anyhow::Result<Option<ActivityEntryModel>> {
        let principal = principal.ok_or_else(|| {
            anyhow!(
                "no acting principal for {} {} ({event})",
                T::subject_type(),
                subject.get_id()
            )
        })?;

        let mut properties = determine_changes(subject, original, event)?;
        if properties.as_object().is_some_and(|map| map.is_empty()) {
            return Ok(None);
        }
        ksort_recursive(&mut properties);

        let body = self.render_description::<T>(event);
        let mut entry = ActivityEntryModel {
            id: Uuid::new_v4(),
            event,
            subject_type: tag(T::subject_type())?,
            subject_id: subject.get_id(),
            causer_type: principal.causer_type.clone(),
            causer_id: principal.causer_id,
            properties,
            body: tag(&body)?,
            log_name: tag(DEFAULT_LOG_NAME)?,
            recorded_at: Utc::now(),
            hash: 0,
        };
        entry.hash = hash_as_i64(&entry).map_err(|e| anyhow!(e))?;

        let recorded = self
            .entries
            .append(&entry)
            .await
            .map_err(|e| anyhow!("failed to append activity entry: {e}"))?;
        Ok(Some(recorded))
    }

    /// Renders the description for an event, substituting the headline-cased
    /// subject type. Events the resolver does not know fall back to the raw
    /// event token.
    fn render_description<T: ActivityTracked>(&self, event: ActivityEvent) -> String {
        let model = headline_case(T::subject_type());
        match self.templates.resolve(TEMPLATE_NAMESPACE, event.as_str()) {
            Some(template) => template.replace(":model", &model),
            None => event.as_str().to_string(),
        }
    }
}

fn tag<const N: usize>(value: &str) -> anyhow::Result<HeaplessString<N>> {
    HeaplessString::try_from(value)
        .map_err(|_| anyhow!("value '{value}' is too long (max {N} chars)"))
}
