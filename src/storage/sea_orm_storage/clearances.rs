use sea_orm::sea_query::OnConflict;
use sea_orm::{ColumnTrait, EntityTrait, QueryFilter, Set};

use super::SeaOrmStorage;
use crate::entity::prelude::{
    AcademicClearances, AssetClearances, FinancialClearances, LibraryClearances,
};
use crate::entity::{academic_clearance, asset_clearance, financial_clearance, library_clearance};
use crate::errors::Result;
use crate::models::clearances::{ClearanceRecord, ClearanceSet};

impl SeaOrmStorage {
    pub(super) async fn get_clearance_set_impl(&self, request_id: i64) -> Result<ClearanceSet> {
        let academic = AcademicClearances::find()
            .filter(academic_clearance::Column::RequestId.eq(request_id))
            .all(&self.db)
            .await?
            .into_iter()
            .map(academic_clearance::Model::into_academic_clearance)
            .collect();

        let library = LibraryClearances::find()
            .filter(library_clearance::Column::RequestId.eq(request_id))
            .all(&self.db)
            .await?
            .into_iter()
            .map(library_clearance::Model::into_library_clearance)
            .collect();

        let financial = FinancialClearances::find()
            .filter(financial_clearance::Column::RequestId.eq(request_id))
            .all(&self.db)
            .await?
            .into_iter()
            .map(financial_clearance::Model::into_financial_clearance)
            .collect();

        let asset = AssetClearances::find()
            .filter(asset_clearance::Column::RequestId.eq(request_id))
            .all(&self.db)
            .await?
            .into_iter()
            .map(asset_clearance::Model::into_asset_clearance)
            .collect();

        Ok(ClearanceSet {
            academic,
            library,
            financial,
            asset,
        })
    }

    /// 以 request_id 为冲突键整体覆盖，重复提交幂等
    pub(super) async fn upsert_clearance_impl(&self, record: ClearanceRecord) -> Result<()> {
        let now = chrono::Utc::now().timestamp();
        match record {
            ClearanceRecord::Academic(c) => {
                let model = academic_clearance::ActiveModel {
                    request_id: Set(c.request_id),
                    faculty_id: Set(c.faculty_id),
                    status: Set(c.status),
                    syllabus_completed: Set(c.syllabus_completed.as_stored().to_string()),
                    internal_marks_uploaded: Set(c.internal_marks_uploaded.as_stored().to_string()),
                    lab_records_submitted: Set(c.lab_records_submitted.as_stored().to_string()),
                    remarks: Set(c.remarks),
                    updated_at: Set(now),
                    ..Default::default()
                };
                AcademicClearances::insert(model)
                    .on_conflict(
                        OnConflict::column(academic_clearance::Column::RequestId)
                            .update_columns([
                                academic_clearance::Column::Status,
                                academic_clearance::Column::SyllabusCompleted,
                                academic_clearance::Column::InternalMarksUploaded,
                                academic_clearance::Column::LabRecordsSubmitted,
                                academic_clearance::Column::Remarks,
                                academic_clearance::Column::UpdatedAt,
                            ])
                            .to_owned(),
                    )
                    .exec(&self.db)
                    .await?;
            }
            ClearanceRecord::Library(c) => {
                let model = library_clearance::ActiveModel {
                    request_id: Set(c.request_id),
                    faculty_id: Set(c.faculty_id),
                    status: Set(c.status),
                    books_returned: Set(c.books_returned.as_stored().to_string()),
                    fines_paid: Set(c.fines_paid.as_stored().to_string()),
                    updated_at: Set(now),
                    ..Default::default()
                };
                LibraryClearances::insert(model)
                    .on_conflict(
                        OnConflict::column(library_clearance::Column::RequestId)
                            .update_columns([
                                library_clearance::Column::Status,
                                library_clearance::Column::BooksReturned,
                                library_clearance::Column::FinesPaid,
                                library_clearance::Column::UpdatedAt,
                            ])
                            .to_owned(),
                    )
                    .exec(&self.db)
                    .await?;
            }
            ClearanceRecord::Financial(c) => {
                let model = financial_clearance::ActiveModel {
                    request_id: Set(c.request_id),
                    faculty_id: Set(c.faculty_id),
                    status: Set(c.status),
                    advance_settled: Set(c.advance_settled.as_stored().to_string()),
                    salary_processed: Set(c.salary_processed.as_stored().to_string()),
                    updated_at: Set(now),
                    ..Default::default()
                };
                FinancialClearances::insert(model)
                    .on_conflict(
                        OnConflict::column(financial_clearance::Column::RequestId)
                            .update_columns([
                                financial_clearance::Column::Status,
                                financial_clearance::Column::AdvanceSettled,
                                financial_clearance::Column::SalaryProcessed,
                                financial_clearance::Column::UpdatedAt,
                            ])
                            .to_owned(),
                    )
                    .exec(&self.db)
                    .await?;
            }
            ClearanceRecord::Asset(c) => {
                let model = asset_clearance::ActiveModel {
                    request_id: Set(c.request_id),
                    faculty_id: Set(c.faculty_id),
                    status: Set(c.status),
                    laptop_returned: Set(c.laptop_returned.as_stored().to_string()),
                    id_card_returned: Set(c.id_card_returned.as_stored().to_string()),
                    updated_at: Set(now),
                    ..Default::default()
                };
                AssetClearances::insert(model)
                    .on_conflict(
                        OnConflict::column(asset_clearance::Column::RequestId)
                            .update_columns([
                                asset_clearance::Column::Status,
                                asset_clearance::Column::LaptopReturned,
                                asset_clearance::Column::IdCardReturned,
                                asset_clearance::Column::UpdatedAt,
                            ])
                            .to_owned(),
                    )
                    .exec(&self.db)
                    .await?;
            }
        }
        Ok(())
    }
}
