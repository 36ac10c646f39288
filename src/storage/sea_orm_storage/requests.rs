use std::collections::HashMap;

use sea_orm::{ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter, QueryOrder, Set};

use super::SeaOrmStorage;
use crate::entity::prelude::{
    AcademicClearances, AssetClearances, Faculties, FinancialClearances, LibraryClearances,
    RelievingRequests,
};
use crate::entity::{
    academic_clearance, asset_clearance, faculties, financial_clearance, library_clearance,
    relieving_requests,
};
use crate::errors::{RelievingSystemError, Result};
use crate::models::clearances::ClearanceSet;
use crate::models::faculties::Faculty;
use crate::models::requests::{
    DocumentKind, RelievingRequest, RequestStatus, RequestWithRelations, SubmitRequestData,
};

impl SeaOrmStorage {
    /// 提交或重新提交。每位教职工至多一条申请，重新提交时
    /// 覆盖内容、清空裁决字段并重置为 SUBMITTED
    pub(super) async fn submit_request_impl(
        &self,
        faculty_id: i64,
        data: SubmitRequestData,
    ) -> Result<RelievingRequest> {
        let now = chrono::Utc::now().timestamp();
        let existing = RelievingRequests::find()
            .filter(relieving_requests::Column::FacultyId.eq(faculty_id))
            .one(&self.db)
            .await?;

        let model = match existing {
            Some(row) => apply_resubmission(row, data, now).update(&self.db).await?,
            None => {
                let active = relieving_requests::ActiveModel {
                    faculty_id: Set(faculty_id),
                    proposed_last_working_day: Set(data.last_working_day),
                    approved_last_working_day: Set(None),
                    reason: Set(data.reason),
                    resignation_letter_token: Set(data.letter_token),
                    status: Set(RequestStatus::Submitted.as_str().to_string()),
                    admin_remarks: Set(None),
                    relieving_letter_ready: Set(false),
                    experience_cert_ready: Set(false),
                    service_cert_ready: Set(false),
                    settlement_ready: Set(false),
                    created_at: Set(now),
                    updated_at: Set(now),
                    ..Default::default()
                };
                active.insert(&self.db).await?
            }
        };

        Ok(model.into_relieving_request())
    }

    pub(super) async fn get_request_by_id_impl(
        &self,
        request_id: i64,
    ) -> Result<Option<RelievingRequest>> {
        Ok(RelievingRequests::find_by_id(request_id)
            .one(&self.db)
            .await?
            .map(relieving_requests::Model::into_relieving_request))
    }

    pub(super) async fn get_request_by_faculty_id_impl(
        &self,
        faculty_id: i64,
    ) -> Result<Option<RelievingRequest>> {
        Ok(RelievingRequests::find()
            .filter(relieving_requests::Column::FacultyId.eq(faculty_id))
            .one(&self.db)
            .await?
            .map(relieving_requests::Model::into_relieving_request))
    }

    pub(super) async fn update_request_status_impl(
        &self,
        request_id: i64,
        status: RequestStatus,
        remarks: Option<String>,
        approved_last_working_day: Option<String>,
    ) -> Result<RelievingRequest> {
        let row = RelievingRequests::find_by_id(request_id)
            .one(&self.db)
            .await?
            .ok_or_else(|| RelievingSystemError::not_found("Relieving request not found"))?;

        let mut active: relieving_requests::ActiveModel = row.into();
        active.status = Set(status.as_str().to_string());
        active.admin_remarks = Set(remarks);
        if status == RequestStatus::Approved {
            if let Some(day) = approved_last_working_day {
                active.approved_last_working_day = Set(Some(day));
            }
        }
        active.updated_at = Set(chrono::Utc::now().timestamp());

        Ok(active.update(&self.db).await?.into_relieving_request())
    }

    pub(super) async fn set_document_flag_impl(
        &self,
        request_id: i64,
        kind: DocumentKind,
    ) -> Result<RelievingRequest> {
        let row = RelievingRequests::find_by_id(request_id)
            .one(&self.db)
            .await?
            .ok_or_else(|| RelievingSystemError::not_found("Relieving request not found"))?;

        let mut active: relieving_requests::ActiveModel = row.into();
        match kind {
            DocumentKind::RelievingLetter => active.relieving_letter_ready = Set(true),
            DocumentKind::ExperienceCertificate => active.experience_cert_ready = Set(true),
            DocumentKind::ServiceCertificate => active.service_cert_ready = Set(true),
            DocumentKind::SettlementStatement => active.settlement_ready = Set(true),
        }
        active.updated_at = Set(chrono::Utc::now().timestamp());

        Ok(active.update(&self.db).await?.into_relieving_request())
    }

    pub(super) async fn list_requests_with_faculty_impl(
        &self,
    ) -> Result<Vec<(RelievingRequest, Option<Faculty>)>> {
        let rows = RelievingRequests::find()
            .find_also_related(Faculties)
            .order_by_desc(relieving_requests::Column::CreatedAt)
            .all(&self.db)
            .await?;

        Ok(rows
            .into_iter()
            .map(|(req, fac)| {
                (
                    req.into_relieving_request(),
                    fac.map(faculties::Model::into_faculty),
                )
            })
            .collect())
    }

    pub(super) async fn list_requests_with_relations_impl(
        &self,
    ) -> Result<Vec<RequestWithRelations>> {
        let rows = RelievingRequests::find()
            .find_also_related(Faculties)
            .order_by_desc(relieving_requests::Column::CreatedAt)
            .all(&self.db)
            .await?;

        let ids: Vec<i64> = rows.iter().map(|(req, _)| req.id).collect();
        let mut sets: HashMap<i64, ClearanceSet> = HashMap::new();

        let academic = AcademicClearances::find()
            .filter(academic_clearance::Column::RequestId.is_in(ids.clone()))
            .all(&self.db)
            .await?;
        for row in academic {
            sets.entry(row.request_id)
                .or_default()
                .academic
                .push(row.into_academic_clearance());
        }

        let library = LibraryClearances::find()
            .filter(library_clearance::Column::RequestId.is_in(ids.clone()))
            .all(&self.db)
            .await?;
        for row in library {
            sets.entry(row.request_id)
                .or_default()
                .library
                .push(row.into_library_clearance());
        }

        let financial = FinancialClearances::find()
            .filter(financial_clearance::Column::RequestId.is_in(ids.clone()))
            .all(&self.db)
            .await?;
        for row in financial {
            sets.entry(row.request_id)
                .or_default()
                .financial
                .push(row.into_financial_clearance());
        }

        let asset = AssetClearances::find()
            .filter(asset_clearance::Column::RequestId.is_in(ids))
            .all(&self.db)
            .await?;
        for row in asset {
            sets.entry(row.request_id)
                .or_default()
                .asset
                .push(row.into_asset_clearance());
        }

        Ok(rows
            .into_iter()
            .map(|(req, fac)| {
                let request = req.into_relieving_request();
                let clearances = sets.remove(&request.id).unwrap_or_default();
                RequestWithRelations {
                    request,
                    faculty: fac.map(faculties::Model::into_faculty),
                    clearances,
                }
            })
            .collect())
    }
}

/// 重新提交的字段重置，纯函数。覆盖提交内容、清空裁决字段并
/// 强制回到 SUBMITTED；未上传新辞职信时沿用原令牌
fn apply_resubmission(
    row: relieving_requests::Model,
    data: SubmitRequestData,
    now: i64,
) -> relieving_requests::ActiveModel {
    let mut active: relieving_requests::ActiveModel = row.into();
    active.proposed_last_working_day = Set(data.last_working_day);
    active.reason = Set(data.reason);
    if let Some(token) = data.letter_token {
        active.resignation_letter_token = Set(Some(token));
    }
    active.status = Set(RequestStatus::Submitted.as_str().to_string());
    active.admin_remarks = Set(None);
    active.approved_last_working_day = Set(None);
    active.updated_at = Set(now);
    active
}

#[cfg(test)]
mod tests {
    use sea_orm::ActiveValue;

    use super::*;

    fn rejected_row() -> relieving_requests::Model {
        relieving_requests::Model {
            id: 7,
            faculty_id: 3,
            proposed_last_working_day: "2026-01-31".to_string(),
            approved_last_working_day: Some("2026-02-15".to_string()),
            reason: "Relocation".to_string(),
            resignation_letter_token: Some("old-token".to_string()),
            status: RequestStatus::Rejected.as_str().to_string(),
            admin_remarks: Some("Handover incomplete".to_string()),
            relieving_letter_ready: false,
            experience_cert_ready: false,
            service_cert_ready: false,
            settlement_ready: false,
            created_at: 1,
            updated_at: 2,
        }
    }

    fn submit_data(letter_token: Option<String>) -> SubmitRequestData {
        SubmitRequestData {
            last_working_day: "2026-03-31".to_string(),
            reason: "Updated handover plan".to_string(),
            letter_token,
        }
    }

    #[test]
    fn resubmission_forces_submitted_and_clears_decision() {
        let active = apply_resubmission(
            rejected_row(),
            submit_data(Some("new-token".to_string())),
            100,
        );

        assert_eq!(
            active.status.clone().unwrap(),
            RequestStatus::Submitted.as_str()
        );
        assert_eq!(active.admin_remarks.clone().unwrap(), None);
        assert_eq!(active.approved_last_working_day.clone().unwrap(), None);
        assert_eq!(
            active.resignation_letter_token.clone().unwrap(),
            Some("new-token".to_string())
        );
        assert_eq!(active.proposed_last_working_day.clone().unwrap(), "2026-03-31");
        assert_eq!(active.updated_at.clone().unwrap(), 100);
    }

    #[test]
    fn resubmission_without_new_letter_keeps_token() {
        let active = apply_resubmission(rejected_row(), submit_data(None), 100);

        assert!(matches!(
            active.resignation_letter_token,
            ActiveValue::Unchanged(Some(ref token)) if token == "old-token"
        ));
    }
}
