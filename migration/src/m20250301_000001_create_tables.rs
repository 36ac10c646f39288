use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // 创建用户表
        manager
            .create_table(
                Table::create()
                    .table(Users::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Users::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(Users::Username)
                            .string()
                            .not_null()
                            .unique_key(),
                    )
                    .col(
                        ColumnDef::new(Users::Email)
                            .string()
                            .not_null()
                            .unique_key(),
                    )
                    .col(ColumnDef::new(Users::PasswordHash).string().not_null())
                    .col(ColumnDef::new(Users::Role).string().not_null())
                    .col(ColumnDef::new(Users::Status).string().not_null())
                    .col(ColumnDef::new(Users::LastLogin).big_integer().null())
                    .col(ColumnDef::new(Users::CreatedAt).big_integer().not_null())
                    .col(ColumnDef::new(Users::UpdatedAt).big_integer().not_null())
                    .to_owned(),
            )
            .await?;

        // 创建教职工档案表（与用户账号一对一）
        manager
            .create_table(
                Table::create()
                    .table(Faculties::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Faculties::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(Faculties::UserId)
                            .big_integer()
                            .not_null()
                            .unique_key(),
                    )
                    .col(ColumnDef::new(Faculties::FullName).string().not_null())
                    .col(
                        ColumnDef::new(Faculties::EmployeeId)
                            .string()
                            .not_null()
                            .unique_key(),
                    )
                    .col(ColumnDef::new(Faculties::Department).string().not_null())
                    .col(ColumnDef::new(Faculties::Designation).string().not_null())
                    .col(ColumnDef::new(Faculties::JoiningDate).string().not_null())
                    .col(
                        ColumnDef::new(Faculties::CreatedAt)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Faculties::UpdatedAt)
                            .big_integer()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(Faculties::Table, Faculties::UserId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // 创建离职申请表（faculty_id 唯一，保证每位教职工至多一条申请）
        manager
            .create_table(
                Table::create()
                    .table(RelievingRequests::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(RelievingRequests::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(RelievingRequests::FacultyId)
                            .big_integer()
                            .not_null()
                            .unique_key(),
                    )
                    .col(
                        ColumnDef::new(RelievingRequests::ProposedLastWorkingDay)
                            .string()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(RelievingRequests::ApprovedLastWorkingDay)
                            .string()
                            .null(),
                    )
                    .col(ColumnDef::new(RelievingRequests::Reason).text().not_null())
                    .col(
                        ColumnDef::new(RelievingRequests::ResignationLetterToken)
                            .string()
                            .null(),
                    )
                    .col(
                        ColumnDef::new(RelievingRequests::Status)
                            .string()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(RelievingRequests::AdminRemarks)
                            .text()
                            .null(),
                    )
                    .col(
                        ColumnDef::new(RelievingRequests::RelievingLetterReady)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(
                        ColumnDef::new(RelievingRequests::ExperienceCertReady)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(
                        ColumnDef::new(RelievingRequests::ServiceCertReady)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(
                        ColumnDef::new(RelievingRequests::SettlementReady)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(
                        ColumnDef::new(RelievingRequests::CreatedAt)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(RelievingRequests::UpdatedAt)
                            .big_integer()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(RelievingRequests::Table, RelievingRequests::FacultyId)
                            .to(Faculties::Table, Faculties::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // 四张清算表，均以 request_id 唯一约束保证每个申请每个模块至多一条记录。
        // 子标志列统一使用字符串存储，兼容布尔值与其字符串序列化两种形态。

        // 教学清算表（教职工自报）
        manager
            .create_table(
                Table::create()
                    .table(AcademicClearance::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(AcademicClearance::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(AcademicClearance::RequestId)
                            .big_integer()
                            .not_null()
                            .unique_key(),
                    )
                    .col(
                        ColumnDef::new(AcademicClearance::FacultyId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(AcademicClearance::SyllabusCompleted)
                            .string()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(AcademicClearance::InternalMarksUploaded)
                            .string()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(AcademicClearance::LabRecordsSubmitted)
                            .string()
                            .not_null(),
                    )
                    .col(ColumnDef::new(AcademicClearance::Remarks).text().null())
                    .col(
                        ColumnDef::new(AcademicClearance::Status)
                            .string()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(AcademicClearance::UpdatedAt)
                            .big_integer()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(AcademicClearance::Table, AcademicClearance::RequestId)
                            .to(RelievingRequests::Table, RelievingRequests::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(AcademicClearance::Table, AcademicClearance::FacultyId)
                            .to(Faculties::Table, Faculties::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // 图书馆清算表
        manager
            .create_table(
                Table::create()
                    .table(LibraryClearance::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(LibraryClearance::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(LibraryClearance::RequestId)
                            .big_integer()
                            .not_null()
                            .unique_key(),
                    )
                    .col(
                        ColumnDef::new(LibraryClearance::FacultyId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(LibraryClearance::BooksReturned)
                            .string()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(LibraryClearance::FinesPaid)
                            .string()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(LibraryClearance::Status)
                            .string()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(LibraryClearance::UpdatedAt)
                            .big_integer()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(LibraryClearance::Table, LibraryClearance::RequestId)
                            .to(RelievingRequests::Table, RelievingRequests::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(LibraryClearance::Table, LibraryClearance::FacultyId)
                            .to(Faculties::Table, Faculties::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // 财务清算表
        manager
            .create_table(
                Table::create()
                    .table(FinancialClearance::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(FinancialClearance::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(FinancialClearance::RequestId)
                            .big_integer()
                            .not_null()
                            .unique_key(),
                    )
                    .col(
                        ColumnDef::new(FinancialClearance::FacultyId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(FinancialClearance::AdvanceSettled)
                            .string()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(FinancialClearance::SalaryProcessed)
                            .string()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(FinancialClearance::Status)
                            .string()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(FinancialClearance::UpdatedAt)
                            .big_integer()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(FinancialClearance::Table, FinancialClearance::RequestId)
                            .to(RelievingRequests::Table, RelievingRequests::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(FinancialClearance::Table, FinancialClearance::FacultyId)
                            .to(Faculties::Table, Faculties::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // 资产清算表
        manager
            .create_table(
                Table::create()
                    .table(AssetClearance::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(AssetClearance::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(AssetClearance::RequestId)
                            .big_integer()
                            .not_null()
                            .unique_key(),
                    )
                    .col(
                        ColumnDef::new(AssetClearance::FacultyId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(AssetClearance::LaptopReturned)
                            .string()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(AssetClearance::IdCardReturned)
                            .string()
                            .not_null(),
                    )
                    .col(ColumnDef::new(AssetClearance::Status).string().not_null())
                    .col(
                        ColumnDef::new(AssetClearance::UpdatedAt)
                            .big_integer()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(AssetClearance::Table, AssetClearance::RequestId)
                            .to(RelievingRequests::Table, RelievingRequests::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(AssetClearance::Table, AssetClearance::FacultyId)
                            .to(Faculties::Table, Faculties::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // 创建文件表（辞职信附件）
        manager
            .create_table(
                Table::create()
                    .table(Files::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Files::LetterToken)
                            .string()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Files::FileName).string().not_null())
                    .col(ColumnDef::new(Files::FileSize).big_integer().not_null())
                    .col(ColumnDef::new(Files::FileType).string().not_null())
                    .col(ColumnDef::new(Files::FacultyId).big_integer().not_null())
                    .col(ColumnDef::new(Files::UploadedAt).big_integer().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .from(Files::Table, Files::FacultyId)
                            .to(Faculties::Table, Faculties::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Files::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(AssetClearance::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(FinancialClearance::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(LibraryClearance::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(AcademicClearance::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(RelievingRequests::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Faculties::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Users::Table).to_owned())
            .await?;
        Ok(())
    }
}

#[derive(DeriveIden)]
enum Users {
    Table,
    Id,
    Username,
    Email,
    PasswordHash,
    Role,
    Status,
    LastLogin,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum Faculties {
    Table,
    Id,
    UserId,
    FullName,
    EmployeeId,
    Department,
    Designation,
    JoiningDate,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum RelievingRequests {
    Table,
    Id,
    FacultyId,
    ProposedLastWorkingDay,
    ApprovedLastWorkingDay,
    Reason,
    ResignationLetterToken,
    Status,
    AdminRemarks,
    RelievingLetterReady,
    ExperienceCertReady,
    ServiceCertReady,
    SettlementReady,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum AcademicClearance {
    Table,
    Id,
    RequestId,
    FacultyId,
    SyllabusCompleted,
    InternalMarksUploaded,
    LabRecordsSubmitted,
    Remarks,
    Status,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum LibraryClearance {
    Table,
    Id,
    RequestId,
    FacultyId,
    BooksReturned,
    FinesPaid,
    Status,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum FinancialClearance {
    Table,
    Id,
    RequestId,
    FacultyId,
    AdvanceSettled,
    SalaryProcessed,
    Status,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum AssetClearance {
    Table,
    Id,
    RequestId,
    FacultyId,
    LaptopReturned,
    IdCardReturned,
    Status,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum Files {
    Table,
    LetterToken,
    FileName,
    FileSize,
    FileType,
    FacultyId,
    UploadedAt,
}
