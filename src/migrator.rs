use sea_orm_migration::prelude::*;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20240301_000001_create_admins_table::Migration),
            Box::new(m20240301_000002_create_catalog_tables::Migration),
            Box::new(m20240301_000003_create_marketing_goals_table::Migration),
            Box::new(m20240301_000004_create_costumers_table::Migration),
            Box::new(m20240301_000005_create_contract_tables::Migration),
            Box::new(m20240301_000006_create_billing_tables::Migration),
        ]
    }
}

// Audit columns (created_by, last_updated_by, nationality_id) carry no FK
// constraint: they reference admins from every table, admins reference
// countries back, and the resulting cycle cannot be expressed on SQLite.
// The service layer treats them as nullable advisory references.

mod m20240301_000001_create_admins_table {
    use sea_orm_migration::prelude::*;

    pub struct Migration;

    impl MigrationName for Migration {
        fn name(&self) -> &str {
            "m20240301_000001_create_admins_table"
        }
    }

    #[async_trait::async_trait]
    impl MigrationTrait for Migration {
        async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .create_table(
                    Table::create()
                        .table(Admins::Table)
                        .if_not_exists()
                        .col(
                            ColumnDef::new(Admins::Id)
                                .integer()
                                .not_null()
                                .auto_increment()
                                .primary_key(),
                        )
                        .col(
                            ColumnDef::new(Admins::Username)
                                .string_len(30)
                                .not_null()
                                .unique_key(),
                        )
                        .col(ColumnDef::new(Admins::Name).string_len(60))
                        .col(ColumnDef::new(Admins::Email).string_len(254).not_null())
                        .col(ColumnDef::new(Admins::PasswordHash).string().not_null())
                        .col(ColumnDef::new(Admins::Title).string_len(30))
                        .col(ColumnDef::new(Admins::Address).string_len(255))
                        .col(ColumnDef::new(Admins::Phone).string_len(30))
                        .col(ColumnDef::new(Admins::PostalCode).string_len(25))
                        .col(ColumnDef::new(Admins::BirthDate).date())
                        .col(ColumnDef::new(Admins::NationalityId).integer())
                        .col(
                            ColumnDef::new(Admins::IsStaff)
                                .boolean()
                                .not_null()
                                .default(false),
                        )
                        .col(
                            ColumnDef::new(Admins::IsActive)
                                .boolean()
                                .not_null()
                                .default(true),
                        )
                        .col(
                            ColumnDef::new(Admins::IsSuperuser)
                                .boolean()
                                .not_null()
                                .default(false),
                        )
                        .col(ColumnDef::new(Admins::CreatedBy).integer())
                        .col(
                            ColumnDef::new(Admins::CreatedAt)
                                .timestamp_with_time_zone()
                                .not_null(),
                        )
                        .to_owned(),
                )
                .await
        }

        async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .drop_table(Table::drop().table(Admins::Table).to_owned())
                .await
        }
    }

    #[derive(DeriveIden)]
    pub enum Admins {
        Table,
        Id,
        Username,
        Name,
        Email,
        PasswordHash,
        Title,
        Address,
        Phone,
        PostalCode,
        BirthDate,
        NationalityId,
        IsStaff,
        IsActive,
        IsSuperuser,
        CreatedBy,
        CreatedAt,
    }
}

mod m20240301_000002_create_catalog_tables {
    use sea_orm_migration::prelude::*;

    pub struct Migration;

    impl MigrationName for Migration {
        fn name(&self) -> &str {
            "m20240301_000002_create_catalog_tables"
        }
    }

    #[async_trait::async_trait]
    impl MigrationTrait for Migration {
        async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .create_table(
                    Table::create()
                        .table(Countries::Table)
                        .if_not_exists()
                        .col(
                            ColumnDef::new(Countries::Id)
                                .integer()
                                .not_null()
                                .auto_increment()
                                .primary_key(),
                        )
                        .col(
                            ColumnDef::new(Countries::Name)
                                .string_len(50)
                                .not_null()
                                .unique_key(),
                        )
                        .col(ColumnDef::new(Countries::Code).string_len(10).not_null())
                        .col(
                            ColumnDef::new(Countries::Abbreviation)
                                .string_len(10)
                                .not_null(),
                        )
                        .col(
                            ColumnDef::new(Countries::IsCovered)
                                .boolean()
                                .not_null()
                                .default(false),
                        )
                        .col(ColumnDef::new(Countries::X).integer())
                        .col(ColumnDef::new(Countries::Y).integer())
                        .col(ColumnDef::new(Countries::CreatedBy).integer())
                        .col(
                            ColumnDef::new(Countries::CreatedAt)
                                .timestamp_with_time_zone()
                                .not_null(),
                        )
                        .to_owned(),
                )
                .await?;

            manager
                .create_table(
                    Table::create()
                        .table(PosCompanies::Table)
                        .if_not_exists()
                        .col(
                            ColumnDef::new(PosCompanies::Id)
                                .integer()
                                .not_null()
                                .auto_increment()
                                .primary_key(),
                        )
                        .col(ColumnDef::new(PosCompanies::Name).string_len(255).not_null())
                        .col(
                            ColumnDef::new(PosCompanies::SerialNumberLength)
                                .integer()
                                .not_null(),
                        )
                        .col(ColumnDef::new(PosCompanies::CreatedBy).integer())
                        .col(
                            ColumnDef::new(PosCompanies::CreatedAt)
                                .timestamp_with_time_zone()
                                .not_null(),
                        )
                        .to_owned(),
                )
                .await?;

            manager
                .create_table(
                    Table::create()
                        .table(PosModels::Table)
                        .if_not_exists()
                        .col(
                            ColumnDef::new(PosModels::Id)
                                .integer()
                                .not_null()
                                .auto_increment()
                                .primary_key(),
                        )
                        .col(ColumnDef::new(PosModels::Name).string_len(255).not_null())
                        .col(ColumnDef::new(PosModels::CompanyId).integer().not_null())
                        .col(
                            ColumnDef::new(PosModels::HardwareCost)
                                .decimal_len(12, 2)
                                .not_null(),
                        )
                        .col(
                            ColumnDef::new(PosModels::SoftwareCost)
                                .decimal_len(12, 2)
                                .not_null(),
                        )
                        .col(
                            ColumnDef::new(PosModels::Price)
                                .decimal_len(12, 2)
                                .not_null(),
                        )
                        .col(ColumnDef::new(PosModels::CreatedBy).integer())
                        .col(
                            ColumnDef::new(PosModels::CreatedAt)
                                .timestamp_with_time_zone()
                                .not_null(),
                        )
                        .foreign_key(
                            ForeignKey::create()
                                .name("fk_pos_models_company")
                                .from(PosModels::Table, PosModels::CompanyId)
                                .to(PosCompanies::Table, PosCompanies::Id),
                        )
                        .to_owned(),
                )
                .await?;

            manager
                .create_table(
                    Table::create()
                        .table(Poses::Table)
                        .if_not_exists()
                        .col(
                            ColumnDef::new(Poses::Id)
                                .integer()
                                .not_null()
                                .auto_increment()
                                .primary_key(),
                        )
                        .col(
                            ColumnDef::new(Poses::SerialNumber)
                                .string_len(55)
                                .not_null(),
                        )
                        .col(ColumnDef::new(Poses::PosType).string_len(1).not_null())
                        .col(ColumnDef::new(Poses::ModelId).integer().not_null())
                        .col(
                            ColumnDef::new(Poses::IsOwn)
                                .boolean()
                                .not_null()
                                .default(true),
                        )
                        .col(
                            ColumnDef::new(Poses::IsActive)
                                .boolean()
                                .not_null()
                                .default(true),
                        )
                        .col(ColumnDef::new(Poses::Note).text())
                        .col(ColumnDef::new(Poses::CreatedBy).integer())
                        .col(
                            ColumnDef::new(Poses::CreatedAt)
                                .timestamp_with_time_zone()
                                .not_null(),
                        )
                        .foreign_key(
                            ForeignKey::create()
                                .name("fk_poses_model")
                                .from(Poses::Table, Poses::ModelId)
                                .to(PosModels::Table, PosModels::Id),
                        )
                        .to_owned(),
                )
                .await?;

            manager
                .create_table(
                    Table::create()
                        .table(VirtualServices::Table)
                        .if_not_exists()
                        .col(
                            ColumnDef::new(VirtualServices::Id)
                                .integer()
                                .not_null()
                                .auto_increment()
                                .primary_key(),
                        )
                        .col(
                            ColumnDef::new(VirtualServices::Name)
                                .string_len(255)
                                .not_null()
                                .unique_key(),
                        )
                        .col(ColumnDef::new(VirtualServices::Price).decimal_len(12, 2))
                        .col(ColumnDef::new(VirtualServices::Cost).decimal_len(12, 2))
                        .col(
                            ColumnDef::new(VirtualServices::IsAvailable)
                                .boolean()
                                .not_null()
                                .default(true),
                        )
                        .col(ColumnDef::new(VirtualServices::CreatedBy).integer())
                        .col(
                            ColumnDef::new(VirtualServices::CreatedAt)
                                .timestamp_with_time_zone()
                                .not_null(),
                        )
                        .to_owned(),
                )
                .await
        }

        async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .drop_table(Table::drop().table(VirtualServices::Table).to_owned())
                .await?;
            manager
                .drop_table(Table::drop().table(Poses::Table).to_owned())
                .await?;
            manager
                .drop_table(Table::drop().table(PosModels::Table).to_owned())
                .await?;
            manager
                .drop_table(Table::drop().table(PosCompanies::Table).to_owned())
                .await?;
            manager
                .drop_table(Table::drop().table(Countries::Table).to_owned())
                .await
        }
    }

    #[derive(DeriveIden)]
    pub enum Countries {
        Table,
        Id,
        Name,
        Code,
        Abbreviation,
        IsCovered,
        X,
        Y,
        CreatedBy,
        CreatedAt,
    }

    #[derive(DeriveIden)]
    pub enum PosCompanies {
        Table,
        Id,
        Name,
        SerialNumberLength,
        CreatedBy,
        CreatedAt,
    }

    #[derive(DeriveIden)]
    pub enum PosModels {
        Table,
        Id,
        Name,
        CompanyId,
        HardwareCost,
        SoftwareCost,
        Price,
        CreatedBy,
        CreatedAt,
    }

    #[derive(DeriveIden)]
    pub enum Poses {
        Table,
        Id,
        SerialNumber,
        PosType,
        ModelId,
        IsOwn,
        IsActive,
        Note,
        CreatedBy,
        CreatedAt,
    }

    #[derive(DeriveIden)]
    pub enum VirtualServices {
        Table,
        Id,
        Name,
        Price,
        Cost,
        IsAvailable,
        CreatedBy,
        CreatedAt,
    }
}

mod m20240301_000003_create_marketing_goals_table {
    use sea_orm_migration::prelude::*;

    pub struct Migration;

    impl MigrationName for Migration {
        fn name(&self) -> &str {
            "m20240301_000003_create_marketing_goals_table"
        }
    }

    #[async_trait::async_trait]
    impl MigrationTrait for Migration {
        async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .create_table(
                    Table::create()
                        .table(MarketingGoals::Table)
                        .if_not_exists()
                        .col(
                            ColumnDef::new(MarketingGoals::Id)
                                .integer()
                                .not_null()
                                .auto_increment()
                                .primary_key(),
                        )
                        .col(
                            ColumnDef::new(MarketingGoals::TradingName)
                                .string_len(255)
                                .not_null(),
                        )
                        .col(ColumnDef::new(MarketingGoals::LegalName).string_len(255))
                        .col(
                            ColumnDef::new(MarketingGoals::BusinessField)
                                .string_len(255)
                                .not_null(),
                        )
                        .col(ColumnDef::new(MarketingGoals::Phone).string_len(55))
                        .col(ColumnDef::new(MarketingGoals::Email).string_len(255))
                        .col(ColumnDef::new(MarketingGoals::Note).text())
                        .col(
                            ColumnDef::new(MarketingGoals::Status)
                                .string_len(1)
                                .not_null(),
                        )
                        .col(ColumnDef::new(MarketingGoals::CreatedBy).integer())
                        .col(ColumnDef::new(MarketingGoals::LastUpdatedBy).integer())
                        .col(
                            ColumnDef::new(MarketingGoals::CreatedAt)
                                .timestamp_with_time_zone()
                                .not_null(),
                        )
                        .to_owned(),
                )
                .await
        }

        async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .drop_table(Table::drop().table(MarketingGoals::Table).to_owned())
                .await
        }
    }

    #[derive(DeriveIden)]
    pub enum MarketingGoals {
        Table,
        Id,
        TradingName,
        LegalName,
        BusinessField,
        Phone,
        Email,
        Note,
        Status,
        CreatedBy,
        LastUpdatedBy,
        CreatedAt,
    }
}

mod m20240301_000004_create_costumers_table {
    use sea_orm_migration::prelude::*;

    use super::m20240301_000002_create_catalog_tables::Countries;

    pub struct Migration;

    impl MigrationName for Migration {
        fn name(&self) -> &str {
            "m20240301_000004_create_costumers_table"
        }
    }

    #[async_trait::async_trait]
    impl MigrationTrait for Migration {
        async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .create_table(
                    Table::create()
                        .table(Costumers::Table)
                        .if_not_exists()
                        .col(
                            ColumnDef::new(Costumers::Id)
                                .integer()
                                .not_null()
                                .auto_increment()
                                .primary_key(),
                        )
                        .col(
                            ColumnDef::new(Costumers::TradingName)
                                .string_len(255)
                                .not_null(),
                        )
                        .col(
                            ColumnDef::new(Costumers::LegalName)
                                .string_len(255)
                                .not_null(),
                        )
                        .col(
                            ColumnDef::new(Costumers::BusinessType)
                                .string_len(2)
                                .not_null(),
                        )
                        .col(
                            ColumnDef::new(Costumers::LegalEntity)
                                .string_len(3)
                                .not_null(),
                        )
                        .col(
                            ColumnDef::new(Costumers::RegisteredAddress)
                                .string_len(255)
                                .not_null(),
                        )
                        .col(
                            ColumnDef::new(Costumers::RegisteredPostalCode)
                                .string_len(50)
                                .not_null(),
                        )
                        .col(ColumnDef::new(Costumers::BusinessAddress).string_len(255))
                        .col(
                            ColumnDef::new(Costumers::BusinessPostalCode)
                                .string_len(50)
                                .not_null(),
                        )
                        .col(ColumnDef::new(Costumers::CountryId).integer())
                        .col(
                            ColumnDef::new(Costumers::CompanyNumber)
                                .string_len(50)
                                .not_null(),
                        )
                        .col(ColumnDef::new(Costumers::LandLine).string_len(25).not_null())
                        .col(
                            ColumnDef::new(Costumers::BusinessEmail)
                                .string_len(255)
                                .not_null(),
                        )
                        .col(ColumnDef::new(Costumers::Website).string_len(255))
                        .col(
                            ColumnDef::new(Costumers::DirectorName)
                                .string_len(110)
                                .not_null(),
                        )
                        .col(
                            ColumnDef::new(Costumers::DirectorPhone)
                                .string_len(55)
                                .not_null(),
                        )
                        .col(
                            ColumnDef::new(Costumers::DirectorEmail)
                                .string_len(255)
                                .not_null(),
                        )
                        .col(
                            ColumnDef::new(Costumers::DirectorAddress)
                                .string_len(255)
                                .not_null(),
                        )
                        .col(
                            ColumnDef::new(Costumers::DirectorPostalCode)
                                .string_len(55)
                                .not_null(),
                        )
                        .col(ColumnDef::new(Costumers::DirectorNationality).string_len(55))
                        .col(ColumnDef::new(Costumers::DirectorBirthDate).date())
                        .col(ColumnDef::new(Costumers::PartnerName).string_len(110))
                        .col(ColumnDef::new(Costumers::PartnerAddress).string_len(255))
                        .col(ColumnDef::new(Costumers::PartnerNationality).string_len(55))
                        .col(ColumnDef::new(Costumers::Shareholder).integer())
                        .col(ColumnDef::new(Costumers::SortCode).string_len(25).not_null())
                        .col(
                            ColumnDef::new(Costumers::IssuingBank)
                                .string_len(255)
                                .not_null(),
                        )
                        .col(
                            ColumnDef::new(Costumers::AccountNumber)
                                .string_len(50)
                                .not_null(),
                        )
                        .col(
                            ColumnDef::new(Costumers::BusinessBankName)
                                .string_len(255)
                                .not_null(),
                        )
                        .col(ColumnDef::new(Costumers::Note).text())
                        .col(ColumnDef::new(Costumers::CreatedBy).integer())
                        .col(ColumnDef::new(Costumers::LastUpdatedBy).integer())
                        .col(
                            ColumnDef::new(Costumers::CreatedAt)
                                .timestamp_with_time_zone()
                                .not_null(),
                        )
                        .foreign_key(
                            ForeignKey::create()
                                .name("fk_costumers_country")
                                .from(Costumers::Table, Costumers::CountryId)
                                .to(Countries::Table, Countries::Id),
                        )
                        .to_owned(),
                )
                .await
        }

        async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .drop_table(Table::drop().table(Costumers::Table).to_owned())
                .await
        }
    }

    #[derive(DeriveIden)]
    pub enum Costumers {
        Table,
        Id,
        TradingName,
        LegalName,
        BusinessType,
        LegalEntity,
        RegisteredAddress,
        RegisteredPostalCode,
        BusinessAddress,
        BusinessPostalCode,
        CountryId,
        CompanyNumber,
        LandLine,
        BusinessEmail,
        Website,
        DirectorName,
        DirectorPhone,
        DirectorEmail,
        DirectorAddress,
        DirectorPostalCode,
        DirectorNationality,
        DirectorBirthDate,
        PartnerName,
        PartnerAddress,
        PartnerNationality,
        Shareholder,
        SortCode,
        IssuingBank,
        AccountNumber,
        BusinessBankName,
        Note,
        CreatedBy,
        LastUpdatedBy,
        CreatedAt,
    }
}

mod m20240301_000005_create_contract_tables {
    use sea_orm_migration::prelude::*;

    use super::m20240301_000002_create_catalog_tables::{Poses, VirtualServices};
    use super::m20240301_000004_create_costumers_table::Costumers;

    pub struct Migration;

    impl MigrationName for Migration {
        fn name(&self) -> &str {
            "m20240301_000005_create_contract_tables"
        }
    }

    #[async_trait::async_trait]
    impl MigrationTrait for Migration {
        async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .create_table(
                    Table::create()
                        .table(Contracts::Table)
                        .if_not_exists()
                        .col(
                            ColumnDef::new(Contracts::Id)
                                .integer()
                                .not_null()
                                .auto_increment()
                                .primary_key(),
                        )
                        .col(ColumnDef::new(Contracts::CostumerId).integer().not_null())
                        .col(
                            ColumnDef::new(Contracts::FaceToFaceSales)
                                .integer()
                                .not_null(),
                        )
                        .col(ColumnDef::new(Contracts::Atv).decimal_len(12, 2).not_null())
                        .col(
                            ColumnDef::new(Contracts::AnnualCardTurnover)
                                .decimal_len(12, 2)
                                .not_null(),
                        )
                        .col(
                            ColumnDef::new(Contracts::AnnualTotalTurnover)
                                .decimal_len(12, 2)
                                .not_null(),
                        )
                        .col(ColumnDef::new(Contracts::Interchange).double().not_null())
                        .col(
                            ColumnDef::new(Contracts::AuthorizationFee)
                                .double()
                                .not_null(),
                        )
                        .col(ColumnDef::new(Contracts::PciDss).double().not_null())
                        .col(ColumnDef::new(Contracts::Acquirer).string_len(2).not_null())
                        .col(ColumnDef::new(Contracts::Mid).string_len(55))
                        .col(ColumnDef::new(Contracts::AmexMid).string_len(55))
                        .col(ColumnDef::new(Contracts::EcommerceMid).string_len(55))
                        .col(ColumnDef::new(Contracts::Tid).string_len(55))
                        .col(ColumnDef::new(Contracts::StartDate).date().not_null())
                        .col(ColumnDef::new(Contracts::EndDate).date().not_null())
                        .col(ColumnDef::new(Contracts::PciDueDate).date())
                        .col(ColumnDef::new(Contracts::LiveDate).date())
                        .col(
                            ColumnDef::new(Contracts::TotalCost)
                                .decimal_len(12, 2)
                                .not_null(),
                        )
                        .col(
                            ColumnDef::new(Contracts::TotalPrice)
                                .decimal_len(12, 2)
                                .not_null(),
                        )
                        .col(ColumnDef::new(Contracts::CreatedBy).integer())
                        .col(
                            ColumnDef::new(Contracts::CreatedAt)
                                .timestamp_with_time_zone()
                                .not_null(),
                        )
                        .foreign_key(
                            ForeignKey::create()
                                .name("fk_contracts_costumer")
                                .from(Contracts::Table, Contracts::CostumerId)
                                .to(Costumers::Table, Costumers::Id),
                        )
                        .to_owned(),
                )
                .await?;

            manager
                .create_table(
                    Table::create()
                        .table(ContractPoses::Table)
                        .if_not_exists()
                        .col(
                            ColumnDef::new(ContractPoses::Id)
                                .integer()
                                .not_null()
                                .auto_increment()
                                .primary_key(),
                        )
                        .col(
                            ColumnDef::new(ContractPoses::ContractId)
                                .integer()
                                .not_null(),
                        )
                        .col(ColumnDef::new(ContractPoses::PosId).integer().not_null())
                        .col(
                            ColumnDef::new(ContractPoses::Price)
                                .decimal_len(12, 2)
                                .not_null(),
                        )
                        .col(
                            ColumnDef::new(ContractPoses::HardwareCost)
                                .decimal_len(12, 2)
                                .not_null(),
                        )
                        .col(
                            ColumnDef::new(ContractPoses::SoftwareCost)
                                .decimal_len(12, 2)
                                .not_null(),
                        )
                        .col(ColumnDef::new(ContractPoses::CreatedBy).integer())
                        .col(
                            ColumnDef::new(ContractPoses::CreatedAt)
                                .timestamp_with_time_zone()
                                .not_null(),
                        )
                        .foreign_key(
                            ForeignKey::create()
                                .name("fk_contract_poses_contract")
                                .from(ContractPoses::Table, ContractPoses::ContractId)
                                .to(Contracts::Table, Contracts::Id),
                        )
                        .foreign_key(
                            ForeignKey::create()
                                .name("fk_contract_poses_pos")
                                .from(ContractPoses::Table, ContractPoses::PosId)
                                .to(Poses::Table, Poses::Id),
                        )
                        .to_owned(),
                )
                .await?;

            manager
                .create_table(
                    Table::create()
                        .table(ContractServices::Table)
                        .if_not_exists()
                        .col(
                            ColumnDef::new(ContractServices::Id)
                                .integer()
                                .not_null()
                                .auto_increment()
                                .primary_key(),
                        )
                        .col(
                            ColumnDef::new(ContractServices::ContractId)
                                .integer()
                                .not_null(),
                        )
                        .col(
                            ColumnDef::new(ContractServices::ServiceId)
                                .integer()
                                .not_null(),
                        )
                        .col(
                            ColumnDef::new(ContractServices::Price)
                                .decimal_len(12, 2)
                                .not_null(),
                        )
                        .col(
                            ColumnDef::new(ContractServices::Cost)
                                .decimal_len(12, 2)
                                .not_null(),
                        )
                        .col(ColumnDef::new(ContractServices::CreatedBy).integer())
                        .col(
                            ColumnDef::new(ContractServices::CreatedAt)
                                .timestamp_with_time_zone()
                                .not_null(),
                        )
                        .foreign_key(
                            ForeignKey::create()
                                .name("fk_contract_services_contract")
                                .from(ContractServices::Table, ContractServices::ContractId)
                                .to(Contracts::Table, Contracts::Id),
                        )
                        .foreign_key(
                            ForeignKey::create()
                                .name("fk_contract_services_service")
                                .from(ContractServices::Table, ContractServices::ServiceId)
                                .to(VirtualServices::Table, VirtualServices::Id),
                        )
                        .to_owned(),
                )
                .await
        }

        async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .drop_table(Table::drop().table(ContractServices::Table).to_owned())
                .await?;
            manager
                .drop_table(Table::drop().table(ContractPoses::Table).to_owned())
                .await?;
            manager
                .drop_table(Table::drop().table(Contracts::Table).to_owned())
                .await
        }
    }

    #[derive(DeriveIden)]
    pub enum Contracts {
        Table,
        Id,
        CostumerId,
        FaceToFaceSales,
        Atv,
        AnnualCardTurnover,
        AnnualTotalTurnover,
        Interchange,
        AuthorizationFee,
        PciDss,
        Acquirer,
        Mid,
        AmexMid,
        EcommerceMid,
        Tid,
        StartDate,
        EndDate,
        PciDueDate,
        LiveDate,
        TotalCost,
        TotalPrice,
        CreatedBy,
        CreatedAt,
    }

    #[derive(DeriveIden)]
    pub enum ContractPoses {
        Table,
        Id,
        ContractId,
        PosId,
        Price,
        HardwareCost,
        SoftwareCost,
        CreatedBy,
        CreatedAt,
    }

    #[derive(DeriveIden)]
    pub enum ContractServices {
        Table,
        Id,
        ContractId,
        ServiceId,
        Price,
        Cost,
        CreatedBy,
        CreatedAt,
    }
}

mod m20240301_000006_create_billing_tables {
    use sea_orm_migration::prelude::*;

    use super::m20240301_000004_create_costumers_table::Costumers;
    use super::m20240301_000005_create_contract_tables::Contracts;

    pub struct Migration;

    impl MigrationName for Migration {
        fn name(&self) -> &str {
            "m20240301_000006_create_billing_tables"
        }
    }

    #[async_trait::async_trait]
    impl MigrationTrait for Migration {
        async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .create_table(
                    Table::create()
                        .table(PaperRolls::Table)
                        .if_not_exists()
                        .col(
                            ColumnDef::new(PaperRolls::Id)
                                .integer()
                                .not_null()
                                .auto_increment()
                                .primary_key(),
                        )
                        .col(ColumnDef::new(PaperRolls::CostumerId).integer().not_null())
                        .col(ColumnDef::new(PaperRolls::Amount).integer().not_null())
                        .col(
                            ColumnDef::new(PaperRolls::Cost)
                                .decimal_len(12, 2)
                                .not_null(),
                        )
                        .col(
                            ColumnDef::new(PaperRolls::Price)
                                .decimal_len(12, 2)
                                .not_null(),
                        )
                        .col(
                            ColumnDef::new(PaperRolls::DirectDebitCost)
                                .decimal_len(12, 2)
                                .not_null(),
                        )
                        .col(
                            ColumnDef::new(PaperRolls::OrderedDate)
                                .timestamp_with_time_zone()
                                .not_null(),
                        )
                        .col(ColumnDef::new(PaperRolls::CreatedBy).integer())
                        .col(
                            ColumnDef::new(PaperRolls::CreatedAt)
                                .timestamp_with_time_zone()
                                .not_null(),
                        )
                        .foreign_key(
                            ForeignKey::create()
                                .name("fk_paper_rolls_costumer")
                                .from(PaperRolls::Table, PaperRolls::CostumerId)
                                .to(Costumers::Table, Costumers::Id),
                        )
                        .to_owned(),
                )
                .await?;

            manager
                .create_table(
                    Table::create()
                        .table(Payments::Table)
                        .if_not_exists()
                        .col(
                            ColumnDef::new(Payments::Id)
                                .integer()
                                .not_null()
                                .auto_increment()
                                .primary_key(),
                        )
                        .col(ColumnDef::new(Payments::ContractId).integer().not_null())
                        .col(
                            ColumnDef::new(Payments::Date)
                                .timestamp_with_time_zone()
                                .not_null(),
                        )
                        .col(
                            ColumnDef::new(Payments::DirectDebitCost)
                                .decimal_len(12, 2)
                                .not_null(),
                        )
                        .col(ColumnDef::new(Payments::CreatedBy).integer())
                        .col(
                            ColumnDef::new(Payments::CreatedAt)
                                .timestamp_with_time_zone()
                                .not_null(),
                        )
                        .foreign_key(
                            ForeignKey::create()
                                .name("fk_payments_contract")
                                .from(Payments::Table, Payments::ContractId)
                                .to(Contracts::Table, Contracts::Id),
                        )
                        .to_owned(),
                )
                .await?;

            manager
                .create_table(
                    Table::create()
                        .table(MidRevenues::Table)
                        .if_not_exists()
                        .col(
                            ColumnDef::new(MidRevenues::Id)
                                .integer()
                                .not_null()
                                .auto_increment()
                                .primary_key(),
                        )
                        .col(ColumnDef::new(MidRevenues::ContractId).integer().not_null())
                        .col(
                            ColumnDef::new(MidRevenues::Income)
                                .decimal_len(12, 2)
                                .not_null(),
                        )
                        .col(
                            ColumnDef::new(MidRevenues::Profit)
                                .decimal_len(12, 2)
                                .not_null(),
                        )
                        .col(
                            ColumnDef::new(MidRevenues::Date)
                                .timestamp_with_time_zone()
                                .not_null(),
                        )
                        .col(ColumnDef::new(MidRevenues::CreatedBy).integer())
                        .col(
                            ColumnDef::new(MidRevenues::CreatedAt)
                                .timestamp_with_time_zone()
                                .not_null(),
                        )
                        .foreign_key(
                            ForeignKey::create()
                                .name("fk_mid_revenues_contract")
                                .from(MidRevenues::Table, MidRevenues::ContractId)
                                .to(Contracts::Table, Contracts::Id),
                        )
                        .to_owned(),
                )
                .await
        }

        async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .drop_table(Table::drop().table(MidRevenues::Table).to_owned())
                .await?;
            manager
                .drop_table(Table::drop().table(Payments::Table).to_owned())
                .await?;
            manager
                .drop_table(Table::drop().table(PaperRolls::Table).to_owned())
                .await
        }
    }

    #[derive(DeriveIden)]
    pub enum PaperRolls {
        Table,
        Id,
        CostumerId,
        Amount,
        Cost,
        Price,
        DirectDebitCost,
        OrderedDate,
        CreatedBy,
        CreatedAt,
    }

    #[derive(DeriveIden)]
    pub enum Payments {
        Table,
        Id,
        ContractId,
        Date,
        DirectDebitCost,
        CreatedBy,
        CreatedAt,
    }

    #[derive(DeriveIden)]
    pub enum MidRevenues {
        Table,
        Id,
        ContractId,
        Income,
        Profit,
        Date,
        CreatedBy,
        CreatedAt,
    }
}
