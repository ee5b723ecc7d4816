use crate::ids::PartyId;
use derive_more::Display;
use serde::{Deserialize, Serialize};

/// A party attached to an order, instrument or execution.
///
/// The triple is opaque to the matching engine: parties are copied verbatim
/// from requests onto resting orders and back out onto executions so both
/// counterparties can be identified on the trade tape.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Party {
    pub party_id: PartyId,
    pub source: PartyIdSource,
    pub role: PartyRole,
}

impl Party {
    pub fn new(party_id: impl Into<PartyId>, source: PartyIdSource, role: PartyRole) -> Self {
        Self {
            party_id: party_id.into(),
            source,
            role,
        }
    }
}

/// Class of the identifier carried in a party id (FIX PartyIDSource).
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display, Serialize, Deserialize,
)]
pub enum PartyIdSource {
    UKNationalInsuranceOrPensionNumber,
    USSocialSecurityNumber,
    USEmployerOrTaxIDNumber,
    AustralianBusinessNumber,
    AustralianTaxFileNumber,
    TaxID,
    KoreanInvestorID,
    TaiwaneseForeignInvestorID,
    TaiwaneseTradingAcct,
    MalaysianCentralDepository,
    ChineseInvestorID,
    ISITCAcronym,
    BIC,
    GeneralIdentifier,
    Proprietary,
    ISOCountryCode,
    SettlementEntityLocation,
    MIC,
    CSDParticipant,
    AustralianCompanyNumber,
    AustralianRegisteredBodyNumber,
    CFTCReportingFirmIdentifier,
    LegalEntityIdentifier,
    InterimIdentifier,
    ShortCodeIdentifier,
    NationalIDNaturalPerson,
    IndiaPermanentAccountNumber,
    FDID,
    SPSAID,
    MasterSPSAID,
}

/// Role a party plays on a message (FIX PartyRole).
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display, Serialize, Deserialize,
)]
pub enum PartyRole {
    ExecutingFirm,
    BrokerOfCredit,
    ClientID,
    ClearingFirm,
    InvestorID,
    IntroducingFirm,
    EnteringFirm,
    Locate,
    FundManagerClientID,
    SettlementLocation,
    OrderOriginationTrader,
    ExecutingTrader,
    OrderOriginationFirm,
    CorrespondantClearingFirm,
    ExecutingSystem,
    ContraFirm,
    ContraClearingFirm,
    SponsoringFirm,
    UnderlyingContraFirm,
    ClearingOrganization,
    Exchange,
    CustomerAccount,
    CorrespondentClearingOrganization,
    CorrespondentBroker,
    Buyer,
    Custodian,
    Intermediary,
    Agent,
    SubCustodian,
    Beneficiary,
    InterestedParty,
    RegulatoryBody,
    LiquidityProvider,
    EnteringTrader,
    ContraTrader,
    PositionAccount,
    ContraInvestorID,
    TransferToFirm,
    ContraPositionAccount,
    ContraExchange,
    InternalCarryAccount,
    OrderEntryOperatorID,
    SecondaryAccountNumber,
    ForeignFirm,
    ThirdPartyAllocationFirm,
    ClaimingAccount,
    AssetManager,
    PledgorAccount,
    PledgeeAccount,
    LargeTraderReportableAccount,
    TraderMnemonic,
    SenderLocation,
    SessionID,
    AcceptableCounterparty,
    UnacceptableCounterparty,
    EnteringUnit,
    ExecutingUnit,
    IntroducingBroker,
    QuoteOriginator,
    ReportOriginator,
    SystematicInternaliser,
    MultilateralTradingFacility,
    RegulatedMarket,
    MarketMaker,
    InvestmentFirm,
    HostCompetentAuthority,
    HomeCompetentAuthority,
    CompetentAuthorityLiquidity,
    CompetentAuthorityTransactionVenue,
    ReportingIntermediary,
    ExecutionVenue,
    MarketDataEntryOriginator,
    LocationID,
    DeskID,
    MarketDataMarket,
    AllocationEntity,
    PrimeBroker,
    StepOutFirm,
    BrokerClearingID,
    CentralRegistrationDepository,
    ClearingAccount,
    AcceptableSettlingCounterparty,
    UnacceptableSettlingCounterparty,
    CLSMemberBank,
    InConcertGroup,
    InConcertControllingEntity,
    LargePositionsReportingAccount,
    SettlementFirm,
    SettlementAccount,
    ReportingMarketCenter,
    RelatedReportingMarketCenter,
    AwayMarket,
    GiveupTradingFirm,
    TakeupTradingFirm,
    GiveupClearingFirm,
    TakeupClearingFirm,
    OriginatingMarket,
    MarginAccount,
    CollateralAssetAccount,
    DataRepository,
    CalculationAgent,
    ExerciseNoticeSender,
    ExerciseNoticeReceiver,
    RateReferenceBank,
    Correspondent,
    BeneficiaryBank,
    Borrower,
    PrimaryObligator,
    Guarantor,
    ExcludedReferenceEntity,
    DeterminingParty,
    HedgingParty,
    ReportingEntity,
    SalesPerson,
    Operator,
    CSD,
    ICSD,
    TradingSubAccount,
    InvestmentDecisionMaker,
    PublishingIntermediary,
    CSDParticipant,
    Issuer,
    ContraCustomerAccount,
    ContraInvestmentDecisionMaker,
}

impl PartyRole {
    /// Parse the display name used by reference-data records.
    pub fn from_name(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|role| role.to_string() == value)
    }
}
