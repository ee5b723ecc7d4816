//! FIX value mappings for every enumerated attribute.
//!
//! Each internal enum value has exactly one FIX representation and the
//! mapping is a round-trip identity: `from_fix(to_fix(v)) == Some(v)`.
//! Conversions are a closed set of match-based functions keyed by the
//! attribute type and the FIX tag it travels in; there is no runtime
//! dispatch and no global table.
//!
//! Tag reference: Side(54), OrdType(40), TimeInForce(59), OrdStatus(39),
//! ExecType(150), SecurityType(167), SecurityIDSource(22),
//! PartyIDSource(447), PartyRole(452), MDEntryType(269),
//! MDUpdateAction(279), MDUpdateType(265), SubscriptionRequestType(263),
//! MDReqRejReason(281), TradingSessionSubID(625),
//! SecurityTradingStatus(326), RefMsgType(372), BusinessRejectReason(380).

use crate::{
    mdata::{
        BusinessRejectReason, MdEntryAction, MdEntryType, MdRejectReason, MdSubscriptionAction,
        MdUpdateType, RejectedMessageType,
    },
    order::{ExecutionType, OrderStatus, OrderType, TimeInForce},
    party::{PartyIdSource, PartyRole},
    phase::{TradingPhase, TradingStatus},
    security::{SecurityIdSource, SecurityType},
    side::Side,
};

impl Side {
    pub const ALL: [Side; 4] = [Side::Buy, Side::Sell, Side::SellShort, Side::SellShortExempt];

    pub const fn to_fix(self) -> char {
        match self {
            Side::Buy => '1',
            Side::Sell => '2',
            Side::SellShort => '5',
            Side::SellShortExempt => '6',
        }
    }

    pub const fn from_fix(code: char) -> Option<Self> {
        match code {
            '1' => Some(Side::Buy),
            '2' => Some(Side::Sell),
            '5' => Some(Side::SellShort),
            '6' => Some(Side::SellShortExempt),
            _ => None,
        }
    }
}

impl OrderType {
    pub const ALL: [OrderType; 2] = [OrderType::Limit, OrderType::Market];

    pub const fn to_fix(self) -> char {
        match self {
            OrderType::Market => '1',
            OrderType::Limit => '2',
        }
    }

    pub const fn from_fix(code: char) -> Option<Self> {
        match code {
            '1' => Some(OrderType::Market),
            '2' => Some(OrderType::Limit),
            _ => None,
        }
    }
}

impl TimeInForce {
    pub const ALL: [TimeInForce; 5] = [
        TimeInForce::Day,
        TimeInForce::ImmediateOrCancel,
        TimeInForce::FillOrKill,
        TimeInForce::GoodTillDate,
        TimeInForce::GoodTillCancel,
    ];

    pub const fn to_fix(self) -> char {
        match self {
            TimeInForce::Day => '0',
            TimeInForce::GoodTillCancel => '1',
            TimeInForce::ImmediateOrCancel => '3',
            TimeInForce::FillOrKill => '4',
            TimeInForce::GoodTillDate => '6',
        }
    }

    pub const fn from_fix(code: char) -> Option<Self> {
        match code {
            '0' => Some(TimeInForce::Day),
            '1' => Some(TimeInForce::GoodTillCancel),
            '3' => Some(TimeInForce::ImmediateOrCancel),
            '4' => Some(TimeInForce::FillOrKill),
            '6' => Some(TimeInForce::GoodTillDate),
            _ => None,
        }
    }
}

impl OrderStatus {
    pub const ALL: [OrderStatus; 6] = [
        OrderStatus::New,
        OrderStatus::PartiallyFilled,
        OrderStatus::Filled,
        OrderStatus::Modified,
        OrderStatus::Cancelled,
        OrderStatus::Rejected,
    ];

    pub const fn to_fix(self) -> char {
        match self {
            OrderStatus::New => '0',
            OrderStatus::PartiallyFilled => '1',
            OrderStatus::Filled => '2',
            OrderStatus::Cancelled => '4',
            OrderStatus::Modified => '5',
            OrderStatus::Rejected => '8',
        }
    }

    pub const fn from_fix(code: char) -> Option<Self> {
        match code {
            '0' => Some(OrderStatus::New),
            '1' => Some(OrderStatus::PartiallyFilled),
            '2' => Some(OrderStatus::Filled),
            '4' => Some(OrderStatus::Cancelled),
            '5' => Some(OrderStatus::Modified),
            '8' => Some(OrderStatus::Rejected),
            _ => None,
        }
    }
}

impl ExecutionType {
    pub const ALL: [ExecutionType; 5] = [
        ExecutionType::OrderPlaced,
        ExecutionType::OrderModified,
        ExecutionType::OrderCancelled,
        ExecutionType::Rejected,
        ExecutionType::OrderTraded,
    ];

    pub const fn to_fix(self) -> char {
        match self {
            ExecutionType::OrderPlaced => '0',
            ExecutionType::OrderCancelled => '4',
            ExecutionType::OrderModified => '5',
            ExecutionType::Rejected => '8',
            ExecutionType::OrderTraded => 'F',
        }
    }

    pub const fn from_fix(code: char) -> Option<Self> {
        match code {
            '0' => Some(ExecutionType::OrderPlaced),
            '4' => Some(ExecutionType::OrderCancelled),
            '5' => Some(ExecutionType::OrderModified),
            '8' => Some(ExecutionType::Rejected),
            'F' => Some(ExecutionType::OrderTraded),
            _ => None,
        }
    }
}

impl SecurityType {
    pub const ALL: [SecurityType; 19] = [
        SecurityType::CommonStock,
        SecurityType::Future,
        SecurityType::Option,
        SecurityType::MultiLeg,
        SecurityType::SyntheticMultiLeg,
        SecurityType::Warrant,
        SecurityType::MutualFund,
        SecurityType::CorporateBond,
        SecurityType::ConvertibleBond,
        SecurityType::RepurchaseAgreement,
        SecurityType::Index,
        SecurityType::ContractForDifference,
        SecurityType::Certificate,
        SecurityType::FxSpot,
        SecurityType::Forward,
        SecurityType::FxForward,
        SecurityType::FxNonDeliverableForward,
        SecurityType::FxSwap,
        SecurityType::FxNonDeliverableSwap,
    ];

    pub const fn to_fix(self) -> &'static str {
        match self {
            SecurityType::CommonStock => "CS",
            SecurityType::Future => "FUT",
            SecurityType::Option => "OPT",
            SecurityType::MultiLeg => "MLEG",
            SecurityType::SyntheticMultiLeg => "SML",
            SecurityType::Warrant => "WAR",
            SecurityType::MutualFund => "MF",
            SecurityType::CorporateBond => "CORP",
            SecurityType::ConvertibleBond => "CB",
            SecurityType::RepurchaseAgreement => "REPO",
            SecurityType::Index => "INDEX",
            SecurityType::ContractForDifference => "CFD",
            SecurityType::Certificate => "CD",
            SecurityType::FxSpot => "FXSPOT",
            SecurityType::Forward => "FORWARD",
            SecurityType::FxForward => "FXFWD",
            SecurityType::FxNonDeliverableForward => "FXNDF",
            SecurityType::FxSwap => "FXSWAP",
            SecurityType::FxNonDeliverableSwap => "FXNDS",
        }
    }

    pub fn from_fix(code: &str) -> Option<Self> {
        match code {
            "CS" => Some(SecurityType::CommonStock),
            "FUT" => Some(SecurityType::Future),
            "OPT" => Some(SecurityType::Option),
            "MLEG" => Some(SecurityType::MultiLeg),
            "SML" => Some(SecurityType::SyntheticMultiLeg),
            "WAR" => Some(SecurityType::Warrant),
            "MF" => Some(SecurityType::MutualFund),
            "CORP" => Some(SecurityType::CorporateBond),
            "CB" => Some(SecurityType::ConvertibleBond),
            "REPO" => Some(SecurityType::RepurchaseAgreement),
            "INDEX" => Some(SecurityType::Index),
            "CFD" => Some(SecurityType::ContractForDifference),
            "CD" => Some(SecurityType::Certificate),
            "FXSPOT" => Some(SecurityType::FxSpot),
            "FORWARD" => Some(SecurityType::Forward),
            "FXFWD" => Some(SecurityType::FxForward),
            "FXNDF" => Some(SecurityType::FxNonDeliverableForward),
            "FXSWAP" => Some(SecurityType::FxSwap),
            "FXNDS" => Some(SecurityType::FxNonDeliverableSwap),
            _ => None,
        }
    }
}

impl SecurityIdSource {
    pub const ALL: [SecurityIdSource; 6] = [
        SecurityIdSource::Cusip,
        SecurityIdSource::Sedol,
        SecurityIdSource::Isin,
        SecurityIdSource::Ric,
        SecurityIdSource::ExchangeSymbol,
        SecurityIdSource::BloombergSymbol,
    ];

    pub const fn to_fix(self) -> &'static str {
        match self {
            SecurityIdSource::Cusip => "1",
            SecurityIdSource::Sedol => "2",
            SecurityIdSource::Isin => "4",
            SecurityIdSource::Ric => "5",
            SecurityIdSource::ExchangeSymbol => "8",
            SecurityIdSource::BloombergSymbol => "A",
        }
    }

    pub fn from_fix(code: &str) -> Option<Self> {
        match code {
            "1" => Some(SecurityIdSource::Cusip),
            "2" => Some(SecurityIdSource::Sedol),
            "4" => Some(SecurityIdSource::Isin),
            "5" => Some(SecurityIdSource::Ric),
            "8" => Some(SecurityIdSource::ExchangeSymbol),
            "A" => Some(SecurityIdSource::BloombergSymbol),
            _ => None,
        }
    }
}

impl PartyIdSource {
    pub const ALL: [PartyIdSource; 30] = [
        PartyIdSource::UKNationalInsuranceOrPensionNumber,
        PartyIdSource::USSocialSecurityNumber,
        PartyIdSource::USEmployerOrTaxIDNumber,
        PartyIdSource::AustralianBusinessNumber,
        PartyIdSource::AustralianTaxFileNumber,
        PartyIdSource::TaxID,
        PartyIdSource::KoreanInvestorID,
        PartyIdSource::TaiwaneseForeignInvestorID,
        PartyIdSource::TaiwaneseTradingAcct,
        PartyIdSource::MalaysianCentralDepository,
        PartyIdSource::ChineseInvestorID,
        PartyIdSource::ISITCAcronym,
        PartyIdSource::BIC,
        PartyIdSource::GeneralIdentifier,
        PartyIdSource::Proprietary,
        PartyIdSource::ISOCountryCode,
        PartyIdSource::SettlementEntityLocation,
        PartyIdSource::MIC,
        PartyIdSource::CSDParticipant,
        PartyIdSource::AustralianCompanyNumber,
        PartyIdSource::AustralianRegisteredBodyNumber,
        PartyIdSource::CFTCReportingFirmIdentifier,
        PartyIdSource::LegalEntityIdentifier,
        PartyIdSource::InterimIdentifier,
        PartyIdSource::ShortCodeIdentifier,
        PartyIdSource::NationalIDNaturalPerson,
        PartyIdSource::IndiaPermanentAccountNumber,
        PartyIdSource::FDID,
        PartyIdSource::SPSAID,
        PartyIdSource::MasterSPSAID,
    ];

    pub const fn to_fix(self) -> char {
        match self {
            PartyIdSource::UKNationalInsuranceOrPensionNumber => '6',
            PartyIdSource::USSocialSecurityNumber => '7',
            PartyIdSource::USEmployerOrTaxIDNumber => '8',
            PartyIdSource::AustralianBusinessNumber => '9',
            PartyIdSource::AustralianTaxFileNumber => 'A',
            PartyIdSource::TaxID => 'J',
            PartyIdSource::KoreanInvestorID => '1',
            PartyIdSource::TaiwaneseForeignInvestorID => '2',
            PartyIdSource::TaiwaneseTradingAcct => '3',
            PartyIdSource::MalaysianCentralDepository => '4',
            PartyIdSource::ChineseInvestorID => '5',
            PartyIdSource::ISITCAcronym => 'I',
            PartyIdSource::BIC => 'B',
            PartyIdSource::GeneralIdentifier => 'C',
            PartyIdSource::Proprietary => 'D',
            PartyIdSource::ISOCountryCode => 'E',
            PartyIdSource::SettlementEntityLocation => 'F',
            PartyIdSource::MIC => 'G',
            PartyIdSource::CSDParticipant => 'H',
            PartyIdSource::AustralianCompanyNumber => 'K',
            PartyIdSource::AustralianRegisteredBodyNumber => 'L',
            PartyIdSource::CFTCReportingFirmIdentifier => 'M',
            PartyIdSource::LegalEntityIdentifier => 'N',
            PartyIdSource::InterimIdentifier => 'O',
            PartyIdSource::ShortCodeIdentifier => 'P',
            PartyIdSource::NationalIDNaturalPerson => 'Q',
            PartyIdSource::IndiaPermanentAccountNumber => 'R',
            PartyIdSource::FDID => 'S',
            PartyIdSource::SPSAID => 'T',
            PartyIdSource::MasterSPSAID => 'U',
        }
    }

    pub const fn from_fix(code: char) -> Option<Self> {
        match code {
            '6' => Some(PartyIdSource::UKNationalInsuranceOrPensionNumber),
            '7' => Some(PartyIdSource::USSocialSecurityNumber),
            '8' => Some(PartyIdSource::USEmployerOrTaxIDNumber),
            '9' => Some(PartyIdSource::AustralianBusinessNumber),
            'A' => Some(PartyIdSource::AustralianTaxFileNumber),
            'J' => Some(PartyIdSource::TaxID),
            '1' => Some(PartyIdSource::KoreanInvestorID),
            '2' => Some(PartyIdSource::TaiwaneseForeignInvestorID),
            '3' => Some(PartyIdSource::TaiwaneseTradingAcct),
            '4' => Some(PartyIdSource::MalaysianCentralDepository),
            '5' => Some(PartyIdSource::ChineseInvestorID),
            'I' => Some(PartyIdSource::ISITCAcronym),
            'B' => Some(PartyIdSource::BIC),
            'C' => Some(PartyIdSource::GeneralIdentifier),
            'D' => Some(PartyIdSource::Proprietary),
            'E' => Some(PartyIdSource::ISOCountryCode),
            'F' => Some(PartyIdSource::SettlementEntityLocation),
            'G' => Some(PartyIdSource::MIC),
            'H' => Some(PartyIdSource::CSDParticipant),
            'K' => Some(PartyIdSource::AustralianCompanyNumber),
            'L' => Some(PartyIdSource::AustralianRegisteredBodyNumber),
            'M' => Some(PartyIdSource::CFTCReportingFirmIdentifier),
            'N' => Some(PartyIdSource::LegalEntityIdentifier),
            'O' => Some(PartyIdSource::InterimIdentifier),
            'P' => Some(PartyIdSource::ShortCodeIdentifier),
            'Q' => Some(PartyIdSource::NationalIDNaturalPerson),
            'R' => Some(PartyIdSource::IndiaPermanentAccountNumber),
            'S' => Some(PartyIdSource::FDID),
            'T' => Some(PartyIdSource::SPSAID),
            'U' => Some(PartyIdSource::MasterSPSAID),
            _ => None,
        }
    }
}

impl PartyRole {
    pub const ALL: [PartyRole; 124] = [
        PartyRole::ExecutingFirm,
        PartyRole::BrokerOfCredit,
        PartyRole::ClientID,
        PartyRole::ClearingFirm,
        PartyRole::InvestorID,
        PartyRole::IntroducingFirm,
        PartyRole::EnteringFirm,
        PartyRole::Locate,
        PartyRole::FundManagerClientID,
        PartyRole::SettlementLocation,
        PartyRole::OrderOriginationTrader,
        PartyRole::ExecutingTrader,
        PartyRole::OrderOriginationFirm,
        PartyRole::CorrespondantClearingFirm,
        PartyRole::ExecutingSystem,
        PartyRole::ContraFirm,
        PartyRole::ContraClearingFirm,
        PartyRole::SponsoringFirm,
        PartyRole::UnderlyingContraFirm,
        PartyRole::ClearingOrganization,
        PartyRole::Exchange,
        PartyRole::CustomerAccount,
        PartyRole::CorrespondentClearingOrganization,
        PartyRole::CorrespondentBroker,
        PartyRole::Buyer,
        PartyRole::Custodian,
        PartyRole::Intermediary,
        PartyRole::Agent,
        PartyRole::SubCustodian,
        PartyRole::Beneficiary,
        PartyRole::InterestedParty,
        PartyRole::RegulatoryBody,
        PartyRole::LiquidityProvider,
        PartyRole::EnteringTrader,
        PartyRole::ContraTrader,
        PartyRole::PositionAccount,
        PartyRole::ContraInvestorID,
        PartyRole::TransferToFirm,
        PartyRole::ContraPositionAccount,
        PartyRole::ContraExchange,
        PartyRole::InternalCarryAccount,
        PartyRole::OrderEntryOperatorID,
        PartyRole::SecondaryAccountNumber,
        PartyRole::ForeignFirm,
        PartyRole::ThirdPartyAllocationFirm,
        PartyRole::ClaimingAccount,
        PartyRole::AssetManager,
        PartyRole::PledgorAccount,
        PartyRole::PledgeeAccount,
        PartyRole::LargeTraderReportableAccount,
        PartyRole::TraderMnemonic,
        PartyRole::SenderLocation,
        PartyRole::SessionID,
        PartyRole::AcceptableCounterparty,
        PartyRole::UnacceptableCounterparty,
        PartyRole::EnteringUnit,
        PartyRole::ExecutingUnit,
        PartyRole::IntroducingBroker,
        PartyRole::QuoteOriginator,
        PartyRole::ReportOriginator,
        PartyRole::SystematicInternaliser,
        PartyRole::MultilateralTradingFacility,
        PartyRole::RegulatedMarket,
        PartyRole::MarketMaker,
        PartyRole::InvestmentFirm,
        PartyRole::HostCompetentAuthority,
        PartyRole::HomeCompetentAuthority,
        PartyRole::CompetentAuthorityLiquidity,
        PartyRole::CompetentAuthorityTransactionVenue,
        PartyRole::ReportingIntermediary,
        PartyRole::ExecutionVenue,
        PartyRole::MarketDataEntryOriginator,
        PartyRole::LocationID,
        PartyRole::DeskID,
        PartyRole::MarketDataMarket,
        PartyRole::AllocationEntity,
        PartyRole::PrimeBroker,
        PartyRole::StepOutFirm,
        PartyRole::BrokerClearingID,
        PartyRole::CentralRegistrationDepository,
        PartyRole::ClearingAccount,
        PartyRole::AcceptableSettlingCounterparty,
        PartyRole::UnacceptableSettlingCounterparty,
        PartyRole::CLSMemberBank,
        PartyRole::InConcertGroup,
        PartyRole::InConcertControllingEntity,
        PartyRole::LargePositionsReportingAccount,
        PartyRole::SettlementFirm,
        PartyRole::SettlementAccount,
        PartyRole::ReportingMarketCenter,
        PartyRole::RelatedReportingMarketCenter,
        PartyRole::AwayMarket,
        PartyRole::GiveupTradingFirm,
        PartyRole::TakeupTradingFirm,
        PartyRole::GiveupClearingFirm,
        PartyRole::TakeupClearingFirm,
        PartyRole::OriginatingMarket,
        PartyRole::MarginAccount,
        PartyRole::CollateralAssetAccount,
        PartyRole::DataRepository,
        PartyRole::CalculationAgent,
        PartyRole::ExerciseNoticeSender,
        PartyRole::ExerciseNoticeReceiver,
        PartyRole::RateReferenceBank,
        PartyRole::Correspondent,
        PartyRole::BeneficiaryBank,
        PartyRole::Borrower,
        PartyRole::PrimaryObligator,
        PartyRole::Guarantor,
        PartyRole::ExcludedReferenceEntity,
        PartyRole::DeterminingParty,
        PartyRole::HedgingParty,
        PartyRole::ReportingEntity,
        PartyRole::SalesPerson,
        PartyRole::Operator,
        PartyRole::CSD,
        PartyRole::ICSD,
        PartyRole::TradingSubAccount,
        PartyRole::InvestmentDecisionMaker,
        PartyRole::PublishingIntermediary,
        PartyRole::CSDParticipant,
        PartyRole::Issuer,
        PartyRole::ContraCustomerAccount,
        PartyRole::ContraInvestmentDecisionMaker,
    ];

    pub const fn to_fix(self) -> u32 {
        match self {
            PartyRole::ExecutingFirm => 1,
            PartyRole::BrokerOfCredit => 2,
            PartyRole::ClientID => 3,
            PartyRole::ClearingFirm => 4,
            PartyRole::InvestorID => 5,
            PartyRole::IntroducingFirm => 6,
            PartyRole::EnteringFirm => 7,
            PartyRole::Locate => 8,
            PartyRole::FundManagerClientID => 9,
            PartyRole::SettlementLocation => 10,
            PartyRole::OrderOriginationTrader => 11,
            PartyRole::ExecutingTrader => 12,
            PartyRole::OrderOriginationFirm => 13,
            PartyRole::GiveupClearingFirm => 14,
            PartyRole::CorrespondantClearingFirm => 15,
            PartyRole::ExecutingSystem => 16,
            PartyRole::ContraFirm => 17,
            PartyRole::ContraClearingFirm => 18,
            PartyRole::SponsoringFirm => 19,
            PartyRole::UnderlyingContraFirm => 20,
            PartyRole::ClearingOrganization => 21,
            PartyRole::Exchange => 22,
            PartyRole::CustomerAccount => 24,
            PartyRole::CorrespondentClearingOrganization => 25,
            PartyRole::CorrespondentBroker => 26,
            PartyRole::Buyer => 27,
            PartyRole::Custodian => 28,
            PartyRole::Intermediary => 29,
            PartyRole::Agent => 30,
            PartyRole::SubCustodian => 31,
            PartyRole::Beneficiary => 32,
            PartyRole::InterestedParty => 33,
            PartyRole::RegulatoryBody => 34,
            PartyRole::LiquidityProvider => 35,
            PartyRole::EnteringTrader => 36,
            PartyRole::ContraTrader => 37,
            PartyRole::PositionAccount => 38,
            PartyRole::ContraInvestorID => 39,
            PartyRole::TransferToFirm => 40,
            PartyRole::ContraPositionAccount => 41,
            PartyRole::ContraExchange => 42,
            PartyRole::InternalCarryAccount => 43,
            PartyRole::OrderEntryOperatorID => 44,
            PartyRole::SecondaryAccountNumber => 45,
            PartyRole::ForeignFirm => 46,
            PartyRole::ThirdPartyAllocationFirm => 47,
            PartyRole::ClaimingAccount => 48,
            PartyRole::AssetManager => 49,
            PartyRole::PledgorAccount => 50,
            PartyRole::PledgeeAccount => 51,
            PartyRole::LargeTraderReportableAccount => 52,
            PartyRole::TraderMnemonic => 53,
            PartyRole::SenderLocation => 54,
            PartyRole::SessionID => 55,
            PartyRole::AcceptableCounterparty => 56,
            PartyRole::UnacceptableCounterparty => 57,
            PartyRole::EnteringUnit => 58,
            PartyRole::ExecutingUnit => 59,
            PartyRole::IntroducingBroker => 60,
            PartyRole::QuoteOriginator => 61,
            PartyRole::ReportOriginator => 62,
            PartyRole::SystematicInternaliser => 63,
            PartyRole::MultilateralTradingFacility => 64,
            PartyRole::RegulatedMarket => 65,
            PartyRole::MarketMaker => 66,
            PartyRole::InvestmentFirm => 67,
            PartyRole::HostCompetentAuthority => 68,
            PartyRole::HomeCompetentAuthority => 69,
            PartyRole::CompetentAuthorityLiquidity => 70,
            PartyRole::CompetentAuthorityTransactionVenue => 71,
            PartyRole::ReportingIntermediary => 72,
            PartyRole::ExecutionVenue => 73,
            PartyRole::MarketDataEntryOriginator => 74,
            PartyRole::LocationID => 75,
            PartyRole::DeskID => 76,
            PartyRole::MarketDataMarket => 77,
            PartyRole::AllocationEntity => 78,
            PartyRole::PrimeBroker => 79,
            PartyRole::StepOutFirm => 80,
            PartyRole::BrokerClearingID => 81,
            PartyRole::CentralRegistrationDepository => 82,
            PartyRole::ClearingAccount => 83,
            PartyRole::AcceptableSettlingCounterparty => 84,
            PartyRole::UnacceptableSettlingCounterparty => 85,
            PartyRole::CLSMemberBank => 86,
            PartyRole::InConcertGroup => 87,
            PartyRole::InConcertControllingEntity => 88,
            PartyRole::LargePositionsReportingAccount => 89,
            PartyRole::SettlementFirm => 90,
            PartyRole::SettlementAccount => 91,
            PartyRole::ReportingMarketCenter => 92,
            PartyRole::RelatedReportingMarketCenter => 93,
            PartyRole::AwayMarket => 94,
            PartyRole::GiveupTradingFirm => 95,
            PartyRole::TakeupTradingFirm => 96,
            PartyRole::TakeupClearingFirm => 98,
            PartyRole::OriginatingMarket => 99,
            PartyRole::MarginAccount => 100,
            PartyRole::CollateralAssetAccount => 101,
            PartyRole::DataRepository => 102,
            PartyRole::CalculationAgent => 103,
            PartyRole::ExerciseNoticeSender => 104,
            PartyRole::ExerciseNoticeReceiver => 105,
            PartyRole::RateReferenceBank => 106,
            PartyRole::Correspondent => 107,
            PartyRole::BeneficiaryBank => 108,
            PartyRole::Borrower => 109,
            PartyRole::PrimaryObligator => 110,
            PartyRole::Guarantor => 111,
            PartyRole::ExcludedReferenceEntity => 112,
            PartyRole::DeterminingParty => 113,
            PartyRole::HedgingParty => 114,
            PartyRole::ReportingEntity => 115,
            PartyRole::SalesPerson => 116,
            PartyRole::Operator => 117,
            PartyRole::CSD => 118,
            PartyRole::ICSD => 119,
            PartyRole::TradingSubAccount => 120,
            PartyRole::InvestmentDecisionMaker => 121,
            PartyRole::PublishingIntermediary => 122,
            PartyRole::CSDParticipant => 123,
            PartyRole::Issuer => 124,
            PartyRole::ContraCustomerAccount => 125,
            PartyRole::ContraInvestmentDecisionMaker => 126,
        }
    }

    pub const fn from_fix(code: u32) -> Option<Self> {
        match code {
            1 => Some(PartyRole::ExecutingFirm),
            2 => Some(PartyRole::BrokerOfCredit),
            3 => Some(PartyRole::ClientID),
            4 => Some(PartyRole::ClearingFirm),
            5 => Some(PartyRole::InvestorID),
            6 => Some(PartyRole::IntroducingFirm),
            7 => Some(PartyRole::EnteringFirm),
            8 => Some(PartyRole::Locate),
            9 => Some(PartyRole::FundManagerClientID),
            10 => Some(PartyRole::SettlementLocation),
            11 => Some(PartyRole::OrderOriginationTrader),
            12 => Some(PartyRole::ExecutingTrader),
            13 => Some(PartyRole::OrderOriginationFirm),
            14 => Some(PartyRole::GiveupClearingFirm),
            15 => Some(PartyRole::CorrespondantClearingFirm),
            16 => Some(PartyRole::ExecutingSystem),
            17 => Some(PartyRole::ContraFirm),
            18 => Some(PartyRole::ContraClearingFirm),
            19 => Some(PartyRole::SponsoringFirm),
            20 => Some(PartyRole::UnderlyingContraFirm),
            21 => Some(PartyRole::ClearingOrganization),
            22 => Some(PartyRole::Exchange),
            24 => Some(PartyRole::CustomerAccount),
            25 => Some(PartyRole::CorrespondentClearingOrganization),
            26 => Some(PartyRole::CorrespondentBroker),
            27 => Some(PartyRole::Buyer),
            28 => Some(PartyRole::Custodian),
            29 => Some(PartyRole::Intermediary),
            30 => Some(PartyRole::Agent),
            31 => Some(PartyRole::SubCustodian),
            32 => Some(PartyRole::Beneficiary),
            33 => Some(PartyRole::InterestedParty),
            34 => Some(PartyRole::RegulatoryBody),
            35 => Some(PartyRole::LiquidityProvider),
            36 => Some(PartyRole::EnteringTrader),
            37 => Some(PartyRole::ContraTrader),
            38 => Some(PartyRole::PositionAccount),
            39 => Some(PartyRole::ContraInvestorID),
            40 => Some(PartyRole::TransferToFirm),
            41 => Some(PartyRole::ContraPositionAccount),
            42 => Some(PartyRole::ContraExchange),
            43 => Some(PartyRole::InternalCarryAccount),
            44 => Some(PartyRole::OrderEntryOperatorID),
            45 => Some(PartyRole::SecondaryAccountNumber),
            46 => Some(PartyRole::ForeignFirm),
            47 => Some(PartyRole::ThirdPartyAllocationFirm),
            48 => Some(PartyRole::ClaimingAccount),
            49 => Some(PartyRole::AssetManager),
            50 => Some(PartyRole::PledgorAccount),
            51 => Some(PartyRole::PledgeeAccount),
            52 => Some(PartyRole::LargeTraderReportableAccount),
            53 => Some(PartyRole::TraderMnemonic),
            54 => Some(PartyRole::SenderLocation),
            55 => Some(PartyRole::SessionID),
            56 => Some(PartyRole::AcceptableCounterparty),
            57 => Some(PartyRole::UnacceptableCounterparty),
            58 => Some(PartyRole::EnteringUnit),
            59 => Some(PartyRole::ExecutingUnit),
            60 => Some(PartyRole::IntroducingBroker),
            61 => Some(PartyRole::QuoteOriginator),
            62 => Some(PartyRole::ReportOriginator),
            63 => Some(PartyRole::SystematicInternaliser),
            64 => Some(PartyRole::MultilateralTradingFacility),
            65 => Some(PartyRole::RegulatedMarket),
            66 => Some(PartyRole::MarketMaker),
            67 => Some(PartyRole::InvestmentFirm),
            68 => Some(PartyRole::HostCompetentAuthority),
            69 => Some(PartyRole::HomeCompetentAuthority),
            70 => Some(PartyRole::CompetentAuthorityLiquidity),
            71 => Some(PartyRole::CompetentAuthorityTransactionVenue),
            72 => Some(PartyRole::ReportingIntermediary),
            73 => Some(PartyRole::ExecutionVenue),
            74 => Some(PartyRole::MarketDataEntryOriginator),
            75 => Some(PartyRole::LocationID),
            76 => Some(PartyRole::DeskID),
            77 => Some(PartyRole::MarketDataMarket),
            78 => Some(PartyRole::AllocationEntity),
            79 => Some(PartyRole::PrimeBroker),
            80 => Some(PartyRole::StepOutFirm),
            81 => Some(PartyRole::BrokerClearingID),
            82 => Some(PartyRole::CentralRegistrationDepository),
            83 => Some(PartyRole::ClearingAccount),
            84 => Some(PartyRole::AcceptableSettlingCounterparty),
            85 => Some(PartyRole::UnacceptableSettlingCounterparty),
            86 => Some(PartyRole::CLSMemberBank),
            87 => Some(PartyRole::InConcertGroup),
            88 => Some(PartyRole::InConcertControllingEntity),
            89 => Some(PartyRole::LargePositionsReportingAccount),
            90 => Some(PartyRole::SettlementFirm),
            91 => Some(PartyRole::SettlementAccount),
            92 => Some(PartyRole::ReportingMarketCenter),
            93 => Some(PartyRole::RelatedReportingMarketCenter),
            94 => Some(PartyRole::AwayMarket),
            95 => Some(PartyRole::GiveupTradingFirm),
            96 => Some(PartyRole::TakeupTradingFirm),
            98 => Some(PartyRole::TakeupClearingFirm),
            99 => Some(PartyRole::OriginatingMarket),
            100 => Some(PartyRole::MarginAccount),
            101 => Some(PartyRole::CollateralAssetAccount),
            102 => Some(PartyRole::DataRepository),
            103 => Some(PartyRole::CalculationAgent),
            104 => Some(PartyRole::ExerciseNoticeSender),
            105 => Some(PartyRole::ExerciseNoticeReceiver),
            106 => Some(PartyRole::RateReferenceBank),
            107 => Some(PartyRole::Correspondent),
            108 => Some(PartyRole::BeneficiaryBank),
            109 => Some(PartyRole::Borrower),
            110 => Some(PartyRole::PrimaryObligator),
            111 => Some(PartyRole::Guarantor),
            112 => Some(PartyRole::ExcludedReferenceEntity),
            113 => Some(PartyRole::DeterminingParty),
            114 => Some(PartyRole::HedgingParty),
            115 => Some(PartyRole::ReportingEntity),
            116 => Some(PartyRole::SalesPerson),
            117 => Some(PartyRole::Operator),
            118 => Some(PartyRole::CSD),
            119 => Some(PartyRole::ICSD),
            120 => Some(PartyRole::TradingSubAccount),
            121 => Some(PartyRole::InvestmentDecisionMaker),
            122 => Some(PartyRole::PublishingIntermediary),
            123 => Some(PartyRole::CSDParticipant),
            124 => Some(PartyRole::Issuer),
            125 => Some(PartyRole::ContraCustomerAccount),
            126 => Some(PartyRole::ContraInvestmentDecisionMaker),
            _ => None,
        }
    }
}

impl MdEntryType {
    pub const ALL: [MdEntryType; 6] = [
        MdEntryType::Bid,
        MdEntryType::Offer,
        MdEntryType::Trade,
        MdEntryType::LowPrice,
        MdEntryType::MidPrice,
        MdEntryType::HighPrice,
    ];

    pub const fn to_fix(self) -> char {
        match self {
            MdEntryType::Bid => '0',
            MdEntryType::Offer => '1',
            MdEntryType::Trade => '2',
            MdEntryType::HighPrice => '7',
            MdEntryType::LowPrice => '8',
            MdEntryType::MidPrice => 'H',
        }
    }

    pub const fn from_fix(code: char) -> Option<Self> {
        match code {
            '0' => Some(MdEntryType::Bid),
            '1' => Some(MdEntryType::Offer),
            '2' => Some(MdEntryType::Trade),
            '7' => Some(MdEntryType::HighPrice),
            '8' => Some(MdEntryType::LowPrice),
            'H' => Some(MdEntryType::MidPrice),
            _ => None,
        }
    }
}

impl MdEntryAction {
    pub const ALL: [MdEntryAction; 3] =
        [MdEntryAction::New, MdEntryAction::Change, MdEntryAction::Delete];

    pub const fn to_fix(self) -> char {
        match self {
            MdEntryAction::New => '0',
            MdEntryAction::Change => '1',
            MdEntryAction::Delete => '2',
        }
    }

    pub const fn from_fix(code: char) -> Option<Self> {
        match code {
            '0' => Some(MdEntryAction::New),
            '1' => Some(MdEntryAction::Change),
            '2' => Some(MdEntryAction::Delete),
            _ => None,
        }
    }
}

impl MdUpdateType {
    pub const ALL: [MdUpdateType; 2] = [MdUpdateType::Snapshot, MdUpdateType::Incremental];

    pub const fn to_fix(self) -> u32 {
        match self {
            MdUpdateType::Snapshot => 0,
            MdUpdateType::Incremental => 1,
        }
    }

    pub const fn from_fix(code: u32) -> Option<Self> {
        match code {
            0 => Some(MdUpdateType::Snapshot),
            1 => Some(MdUpdateType::Incremental),
            _ => None,
        }
    }
}

impl MdSubscriptionAction {
    pub const ALL: [MdSubscriptionAction; 3] = [
        MdSubscriptionAction::Subscribe,
        MdSubscriptionAction::Unsubscribe,
        MdSubscriptionAction::Snapshot,
    ];

    pub const fn to_fix(self) -> char {
        match self {
            MdSubscriptionAction::Snapshot => '0',
            MdSubscriptionAction::Subscribe => '1',
            MdSubscriptionAction::Unsubscribe => '2',
        }
    }

    pub const fn from_fix(code: char) -> Option<Self> {
        match code {
            '0' => Some(MdSubscriptionAction::Snapshot),
            '1' => Some(MdSubscriptionAction::Subscribe),
            '2' => Some(MdSubscriptionAction::Unsubscribe),
            _ => None,
        }
    }
}

impl MdRejectReason {
    pub const ALL: [MdRejectReason; 2] =
        [MdRejectReason::UnknownSymbol, MdRejectReason::DuplicateMdReqId];

    pub const fn to_fix(self) -> char {
        match self {
            MdRejectReason::UnknownSymbol => '0',
            MdRejectReason::DuplicateMdReqId => '1',
        }
    }

    pub const fn from_fix(code: char) -> Option<Self> {
        match code {
            '0' => Some(MdRejectReason::UnknownSymbol),
            '1' => Some(MdRejectReason::DuplicateMdReqId),
            _ => None,
        }
    }
}

impl TradingPhase {
    pub const ALL: [TradingPhase; 6] = [
        TradingPhase::Open,
        TradingPhase::Closed,
        TradingPhase::PostTrading,
        TradingPhase::OpeningAuction,
        TradingPhase::IntradayAuction,
        TradingPhase::ClosingAuction,
    ];

    // Closed has no value in the standard TradingSessionSubID set; "10" is
    // outside the standard range and kept bijective by the mapping tests.
    pub const fn to_fix(self) -> &'static str {
        match self {
            TradingPhase::OpeningAuction => "2",
            TradingPhase::Open => "3",
            TradingPhase::ClosingAuction => "4",
            TradingPhase::PostTrading => "5",
            TradingPhase::IntradayAuction => "6",
            TradingPhase::Closed => "10",
        }
    }

    pub fn from_fix(code: &str) -> Option<Self> {
        match code {
            "2" => Some(TradingPhase::OpeningAuction),
            "3" => Some(TradingPhase::Open),
            "4" => Some(TradingPhase::ClosingAuction),
            "5" => Some(TradingPhase::PostTrading),
            "6" => Some(TradingPhase::IntradayAuction),
            "10" => Some(TradingPhase::Closed),
            _ => None,
        }
    }
}

impl TradingStatus {
    pub const ALL: [TradingStatus; 2] = [TradingStatus::Halt, TradingStatus::Resume];

    pub const fn to_fix(self) -> u32 {
        match self {
            TradingStatus::Halt => 2,
            TradingStatus::Resume => 3,
        }
    }

    pub const fn from_fix(code: u32) -> Option<Self> {
        match code {
            2 => Some(TradingStatus::Halt),
            3 => Some(TradingStatus::Resume),
            _ => None,
        }
    }
}

impl RejectedMessageType {
    pub const ALL: [RejectedMessageType; 1] = [RejectedMessageType::SecurityStatusRequest];

    pub const fn to_fix(self) -> &'static str {
        match self {
            RejectedMessageType::SecurityStatusRequest => "e",
        }
    }

    pub fn from_fix(code: &str) -> Option<Self> {
        match code {
            "e" => Some(RejectedMessageType::SecurityStatusRequest),
            _ => None,
        }
    }
}

impl BusinessRejectReason {
    pub const ALL: [BusinessRejectReason; 3] = [
        BusinessRejectReason::Other,
        BusinessRejectReason::UnknownId,
        BusinessRejectReason::UnknownSecurity,
    ];

    pub const fn to_fix(self) -> u32 {
        match self {
            BusinessRejectReason::Other => 0,
            BusinessRejectReason::UnknownId => 1,
            BusinessRejectReason::UnknownSecurity => 2,
        }
    }

    pub const fn from_fix(code: u32) -> Option<Self> {
        match code {
            0 => Some(BusinessRejectReason::Other),
            1 => Some(BusinessRejectReason::UnknownId),
            2 => Some(BusinessRejectReason::UnknownSecurity),
            _ => None,
        }
    }
}
