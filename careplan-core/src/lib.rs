//! Kiểu dữ liệu lõi cho báo cáo care plan: bản ghi, bảng tra cứu, khối bố cục.

use std::path::Path;

use serde::{Deserialize, Serialize};

/// Cấu hình cố định của tài liệu xuất ra.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ReportConfig {
    /// Tên tổ chức in ở đầu trang đầu tiên.
    pub organization: String,
    /// Dòng bảo mật in ở chân mỗi trang.
    pub confidentiality_notice: String,
    pub page: PageGeometry,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            organization: "Reconcile C.A.R.E.".to_string(),
            confidentiality_notice: "Reconcile C.A.R.E. – Confidential Health Information"
                .to_string(),
            page: PageGeometry::default(),
        }
    }
}

/// Kích thước trang và lề, tính bằng point (1/72 inch).
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct PageGeometry {
    pub width: f32,
    pub height: f32,
    pub margin_top: f32,
    pub margin_right: f32,
    pub margin_bottom: f32,
    pub margin_left: f32,
}

impl Default for PageGeometry {
    fn default() -> Self {
        // US Letter, lề 0.75 inch.
        Self {
            width: 612.0,
            height: 792.0,
            margin_top: 54.0,
            margin_right: 54.0,
            margin_bottom: 54.0,
            margin_left: 54.0,
        }
    }
}

impl PageGeometry {
    pub fn content_width(&self) -> f32 {
        self.width - self.margin_left - self.margin_right
    }

    pub fn content_height(&self) -> f32 {
        self.height - self.margin_top - self.margin_bottom
    }
}

/// Thang mức độ 5 bậc dùng chung cho 4Ps và SDOH.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(rename_all = "snake_case")]
pub enum ScoreLevel {
    Crisis,
    AtRisk,
    Struggling,
    Stable,
    Thriving,
}

impl ScoreLevel {
    pub const ALL: [ScoreLevel; 5] = [
        ScoreLevel::Crisis,
        ScoreLevel::AtRisk,
        ScoreLevel::Struggling,
        ScoreLevel::Stable,
        ScoreLevel::Thriving,
    ];

    /// Trả về `None` cho mọi điểm nằm ngoài 1..=5 (kể cả 0).
    pub fn from_score(score: i64) -> Option<Self> {
        match score {
            1 => Some(ScoreLevel::Crisis),
            2 => Some(ScoreLevel::AtRisk),
            3 => Some(ScoreLevel::Struggling),
            4 => Some(ScoreLevel::Stable),
            5 => Some(ScoreLevel::Thriving),
            _ => None,
        }
    }

    pub fn score(self) -> u8 {
        match self {
            ScoreLevel::Crisis => 1,
            ScoreLevel::AtRisk => 2,
            ScoreLevel::Struggling => 3,
            ScoreLevel::Stable => 4,
            ScoreLevel::Thriving => 5,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ScoreLevel::Crisis => "Crisis",
            ScoreLevel::AtRisk => "At Risk",
            ScoreLevel::Struggling => "Struggling",
            ScoreLevel::Stable => "Stable",
            ScoreLevel::Thriving => "Thriving",
        }
    }

    /// Màu hex hiển thị cho từng bậc.
    pub fn color(self) -> &'static str {
        match self {
            ScoreLevel::Crisis => "#dc2626",
            ScoreLevel::AtRisk => "#f97316",
            ScoreLevel::Struggling => "#eab308",
            ScoreLevel::Stable => "#22c55e",
            ScoreLevel::Thriving => "#10b981",
        }
    }
}

/// Giá trị mã hóa có bảng nhãn cố định và nhánh dự phòng cho mã lạ.
pub trait CodedValue: Sized {
    fn from_code(code: &str) -> Self;
    fn code(&self) -> &str;
    /// Nhãn trong bảng tra cứu, `None` nếu mã không có trong bảng.
    fn known_label(&self) -> Option<&'static str>;
}

/// Loại care plan.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum PlanType {
    #[default]
    Initial,
    Routine60Day,
    Accelerated30Day,
    EventBased,
    AttorneyRequest,
    Discharge,
    Other(String),
}

impl CodedValue for PlanType {
    fn from_code(code: &str) -> Self {
        match code {
            "initial" => PlanType::Initial,
            "routine_60_day" => PlanType::Routine60Day,
            "accelerated_30_day" => PlanType::Accelerated30Day,
            "event_based" => PlanType::EventBased,
            "attorney_request" => PlanType::AttorneyRequest,
            "discharge" => PlanType::Discharge,
            other => PlanType::Other(other.to_string()),
        }
    }

    fn code(&self) -> &str {
        match self {
            PlanType::Initial => "initial",
            PlanType::Routine60Day => "routine_60_day",
            PlanType::Accelerated30Day => "accelerated_30_day",
            PlanType::EventBased => "event_based",
            PlanType::AttorneyRequest => "attorney_request",
            PlanType::Discharge => "discharge",
            PlanType::Other(code) => code,
        }
    }

    fn known_label(&self) -> Option<&'static str> {
        match self {
            PlanType::Initial => Some("Initial Care Plan"),
            PlanType::Routine60Day => Some("60-Day Routine Review"),
            PlanType::Accelerated30Day => Some("30-Day Accelerated Review"),
            PlanType::EventBased => Some("Event-Based Review"),
            PlanType::AttorneyRequest => Some("Attorney-Requested Review"),
            PlanType::Discharge => Some("Discharge Care Plan"),
            PlanType::Other(_) => None,
        }
    }
}

/// Nhóm overlay áp dụng cho care plan.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum OverlayCategory {
    Geriatric60Plus,
    CaregiverDependent,
    Student18To24,
    Adolescent13To17,
    Child3To12,
    InfantToddler0To2,
    GenderFemale,
    GenderMale,
    TransgenderGenderDiverse,
    Other(String),
}

impl CodedValue for OverlayCategory {
    fn from_code(code: &str) -> Self {
        match code {
            "geriatric_60_plus" => OverlayCategory::Geriatric60Plus,
            "caregiver_dependent" => OverlayCategory::CaregiverDependent,
            "student_18_24" => OverlayCategory::Student18To24,
            "adolescent_13_17" => OverlayCategory::Adolescent13To17,
            "child_3_12" => OverlayCategory::Child3To12,
            "infant_toddler_0_2" => OverlayCategory::InfantToddler0To2,
            "gender_female" => OverlayCategory::GenderFemale,
            "gender_male" => OverlayCategory::GenderMale,
            "transgender_gender_diverse" => OverlayCategory::TransgenderGenderDiverse,
            other => OverlayCategory::Other(other.to_string()),
        }
    }

    fn code(&self) -> &str {
        match self {
            OverlayCategory::Geriatric60Plus => "geriatric_60_plus",
            OverlayCategory::CaregiverDependent => "caregiver_dependent",
            OverlayCategory::Student18To24 => "student_18_24",
            OverlayCategory::Adolescent13To17 => "adolescent_13_17",
            OverlayCategory::Child3To12 => "child_3_12",
            OverlayCategory::InfantToddler0To2 => "infant_toddler_0_2",
            OverlayCategory::GenderFemale => "gender_female",
            OverlayCategory::GenderMale => "gender_male",
            OverlayCategory::TransgenderGenderDiverse => "transgender_gender_diverse",
            OverlayCategory::Other(code) => code,
        }
    }

    fn known_label(&self) -> Option<&'static str> {
        match self {
            OverlayCategory::Geriatric60Plus => Some("60+ Geriatric Overlay"),
            OverlayCategory::CaregiverDependent => Some("Caregiver/Dependent Overlay"),
            OverlayCategory::Student18To24 => Some("Student Lens"),
            OverlayCategory::Adolescent13To17 => Some("Adolescent Lens"),
            OverlayCategory::Child3To12 => Some("Child Lens"),
            OverlayCategory::InfantToddler0To2 => Some("Infant/Toddler Lens"),
            OverlayCategory::GenderFemale => Some("Gender-Specific: Female"),
            OverlayCategory::GenderMale => Some("Gender-Specific: Male"),
            OverlayCategory::TransgenderGenderDiverse => {
                Some("Transgender Health & Context Overlay")
            }
            OverlayCategory::Other(_) => None,
        }
    }
}

/// Nguồn guideline lâm sàng được trích dẫn.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum GuidelineCategory {
    Odg,
    Mcg,
    Acoem,
    Internal,
    Other(String),
}

impl CodedValue for GuidelineCategory {
    fn from_code(code: &str) -> Self {
        match code.to_ascii_lowercase().as_str() {
            "odg" => GuidelineCategory::Odg,
            "mcg" => GuidelineCategory::Mcg,
            "acoem" => GuidelineCategory::Acoem,
            "internal" => GuidelineCategory::Internal,
            _ => GuidelineCategory::Other(code.to_string()),
        }
    }

    fn code(&self) -> &str {
        match self {
            GuidelineCategory::Odg => "odg",
            GuidelineCategory::Mcg => "mcg",
            GuidelineCategory::Acoem => "acoem",
            GuidelineCategory::Internal => "internal",
            GuidelineCategory::Other(code) => code,
        }
    }

    fn known_label(&self) -> Option<&'static str> {
        match self {
            GuidelineCategory::Odg => Some("ODG"),
            GuidelineCategory::Mcg => Some("MCG"),
            GuidelineCategory::Acoem => Some("ACOEM"),
            GuidelineCategory::Internal => Some("Internal"),
            GuidelineCategory::Other(_) => None,
        }
    }
}

/// Mười mục "care-V", khóa 1..=10.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(rename_all = "snake_case")]
pub enum CareV {
    Validate,
    Vitals,
    Verify,
    Visualize,
    Value,
    Voice,
    Volunteer,
    Vigilance,
    Victory,
    VerifyDischarge,
}

impl CareV {
    pub const ALL: [CareV; 10] = [
        CareV::Validate,
        CareV::Vitals,
        CareV::Verify,
        CareV::Visualize,
        CareV::Value,
        CareV::Voice,
        CareV::Volunteer,
        CareV::Vigilance,
        CareV::Victory,
        CareV::VerifyDischarge,
    ];

    pub fn from_number(number: i64) -> Option<Self> {
        if !(1..=10).contains(&number) {
            return None;
        }
        Some(Self::ALL[(number - 1) as usize])
    }

    pub fn number(self) -> u8 {
        Self::ALL
            .iter()
            .position(|v| *v == self)
            .map(|idx| idx as u8 + 1)
            .unwrap_or_default()
    }

    pub fn name(self) -> &'static str {
        match self {
            CareV::Validate => "Validate",
            CareV::Vitals => "Vitals",
            CareV::Verify => "Verify",
            CareV::Visualize => "Visualize",
            CareV::Value => "Value",
            CareV::Voice => "Voice",
            CareV::Volunteer => "Volunteer",
            CareV::Vigilance => "Vigilance",
            CareV::Victory => "Victory",
            CareV::VerifyDischarge => "Verify Discharge",
        }
    }
}

/// Trạng thái của một mục checklist; giữ nguyên chuỗi gốc cho giá trị lạ.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum ChecklistStatus {
    #[default]
    Pending,
    Completed,
    Other(String),
}

impl ChecklistStatus {
    pub fn parse(raw: &str) -> Self {
        match raw {
            "pending" => ChecklistStatus::Pending,
            "completed" => ChecklistStatus::Completed,
            other => ChecklistStatus::Other(other.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            ChecklistStatus::Pending => "pending",
            ChecklistStatus::Completed => "completed",
            ChecklistStatus::Other(raw) => raw,
        }
    }

    pub fn is_completed(&self) -> bool {
        matches!(self, ChecklistStatus::Completed)
    }
}

/// Bản ghi care plan gốc; thiếu bản ghi này thì không tạo báo cáo.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct CarePlan {
    pub id: String,
    pub case_id: Option<String>,
    pub plan_type: PlanType,
    pub plan_number: u32,
    /// Chuỗi ISO-8601 thô, định dạng lúc dựng báo cáo.
    pub created_at: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Case {
    pub case_number: Option<String>,
    pub date_of_injury: Option<String>,
    pub injury_type: Option<String>,
    pub client: Option<Client>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Client {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
}

impl Client {
    /// Họ tên đầy đủ, `None` nếu cả hai phần đều trống.
    pub fn display_name(&self) -> Option<String> {
        let first = self.first_name.as_deref().unwrap_or("");
        let last = self.last_name.as_deref().unwrap_or("");
        let full = format!("{first} {last}").trim().to_string();
        if full.is_empty() {
            None
        } else {
            Some(full)
        }
    }
}

/// Bốn lĩnh vực của đánh giá 4Ps, theo thứ tự hiển thị cố định.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum WellnessDomain {
    Physical,
    Psychological,
    Psychosocial,
    Professional,
}

impl WellnessDomain {
    pub const ALL: [WellnessDomain; 4] = [
        WellnessDomain::Physical,
        WellnessDomain::Psychological,
        WellnessDomain::Psychosocial,
        WellnessDomain::Professional,
    ];

    pub fn label(self) -> &'static str {
        match self {
            WellnessDomain::Physical => "P1 - Physical Wellness",
            WellnessDomain::Psychological => "P2 - Psychological Wellness",
            WellnessDomain::Psychosocial => "P3 - Psychosocial Wellness",
            WellnessDomain::Professional => "P4 - Professional Wellness",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct WellnessAssessment {
    pub physical: Option<i64>,
    pub psychological: Option<i64>,
    pub psychosocial: Option<i64>,
    pub professional: Option<i64>,
    pub physical_notes: Option<String>,
    pub psychological_notes: Option<String>,
    pub psychosocial_notes: Option<String>,
    pub professional_notes: Option<String>,
}

impl WellnessAssessment {
    pub fn score(&self, domain: WellnessDomain) -> Option<i64> {
        match domain {
            WellnessDomain::Physical => self.physical,
            WellnessDomain::Psychological => self.psychological,
            WellnessDomain::Psychosocial => self.psychosocial,
            WellnessDomain::Professional => self.professional,
        }
    }

    pub fn notes(&self, domain: WellnessDomain) -> Option<&str> {
        match domain {
            WellnessDomain::Physical => self.physical_notes.as_deref(),
            WellnessDomain::Psychological => self.psychological_notes.as_deref(),
            WellnessDomain::Psychosocial => self.psychosocial_notes.as_deref(),
            WellnessDomain::Professional => self.professional_notes.as_deref(),
        }
    }
}

/// Năm lĩnh vực SDOH.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum SdohDomain {
    Economic,
    Education,
    Healthcare,
    Neighborhood,
    Social,
}

impl SdohDomain {
    pub const ALL: [SdohDomain; 5] = [
        SdohDomain::Economic,
        SdohDomain::Education,
        SdohDomain::Healthcare,
        SdohDomain::Neighborhood,
        SdohDomain::Social,
    ];

    pub fn label(self) -> &'static str {
        match self {
            SdohDomain::Economic => "Economic Stability",
            SdohDomain::Education => "Education Access",
            SdohDomain::Healthcare => "Healthcare Access",
            SdohDomain::Neighborhood => "Neighborhood & Environment",
            SdohDomain::Social => "Social & Community",
        }
    }
}

/// Cờ rào cản SDOH, theo thứ tự hiển thị cố định.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum SdohBarrier {
    HousingInsecurity,
    FoodInsecurity,
    TransportationBarrier,
    FinancialHardship,
    SocialIsolation,
}

impl SdohBarrier {
    pub const ALL: [SdohBarrier; 5] = [
        SdohBarrier::HousingInsecurity,
        SdohBarrier::FoodInsecurity,
        SdohBarrier::TransportationBarrier,
        SdohBarrier::FinancialHardship,
        SdohBarrier::SocialIsolation,
    ];

    pub fn label(self) -> &'static str {
        match self {
            SdohBarrier::HousingInsecurity => "Housing Insecurity",
            SdohBarrier::FoodInsecurity => "Food Insecurity",
            SdohBarrier::TransportationBarrier => "Transportation Barrier",
            SdohBarrier::FinancialHardship => "Financial Hardship",
            SdohBarrier::SocialIsolation => "Social Isolation",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct SdohAssessment {
    pub economic: Option<i64>,
    pub education: Option<i64>,
    pub healthcare: Option<i64>,
    pub neighborhood: Option<i64>,
    pub social: Option<i64>,
    pub housing_insecurity: bool,
    pub food_insecurity: bool,
    pub transportation_barrier: bool,
    pub financial_hardship: bool,
    pub social_isolation: bool,
}

impl SdohAssessment {
    pub fn score(&self, domain: SdohDomain) -> Option<i64> {
        match domain {
            SdohDomain::Economic => self.economic,
            SdohDomain::Education => self.education,
            SdohDomain::Healthcare => self.healthcare,
            SdohDomain::Neighborhood => self.neighborhood,
            SdohDomain::Social => self.social,
        }
    }

    pub fn has_barrier(&self, barrier: SdohBarrier) -> bool {
        match barrier {
            SdohBarrier::HousingInsecurity => self.housing_insecurity,
            SdohBarrier::FoodInsecurity => self.food_insecurity,
            SdohBarrier::TransportationBarrier => self.transportation_barrier,
            SdohBarrier::FinancialHardship => self.financial_hardship,
            SdohBarrier::SocialIsolation => self.social_isolation,
        }
    }

    /// Các rào cản đang bật, theo thứ tự cố định.
    pub fn barriers(&self) -> Vec<SdohBarrier> {
        SdohBarrier::ALL
            .into_iter()
            .filter(|barrier| self.has_barrier(*barrier))
            .collect()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct OverlaySelection {
    pub category: OverlayCategory,
    pub subtype: Option<String>,
    pub notes: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GuidelineReference {
    pub category: GuidelineCategory,
    pub name: String,
    pub recommendation: Option<String>,
    pub deviation: Option<Deviation>,
}

/// Lý do lệch khỏi guideline; phần giải trình chỉ tồn tại khi có lý do.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Deviation {
    pub reason: String,
    pub justification: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ChecklistItem {
    pub key: CareV,
    pub status: ChecklistStatus,
    pub findings: Option<String>,
    pub recommendations: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct MedicationItem {
    pub name: String,
    pub dosage: Option<String>,
    pub frequency: Option<String>,
    pub prescriber: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Attestation {
    pub attested_at: Option<String>,
    pub skipped_sections: Vec<String>,
    pub skipped_justification: Option<String>,
}

/// Ảnh chụp bất biến của mọi bản ghi liên quan tới một care plan.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct ReportSnapshot {
    pub care_plan: CarePlan,
    pub case: Option<Case>,
    pub wellness: Option<WellnessAssessment>,
    pub sdoh: Option<SdohAssessment>,
    pub overlays: Vec<OverlaySelection>,
    pub guidelines: Vec<GuidelineReference>,
    pub checklist: Vec<ChecklistItem>,
    pub medications: Vec<MedicationItem>,
    pub attestation: Option<Attestation>,
}

impl ReportSnapshot {
    /// Snapshot chỉ có care plan, các phần khác để trống.
    pub fn sparse(care_plan: CarePlan) -> Self {
        Self {
            care_plan,
            ..Self::default()
        }
    }
}

/// Một khối bố cục, đơn vị trao cho engine dựng trang.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Block {
    Title { text: String },
    Heading { text: String, level: HeadingLevel },
    Paragraph(Paragraph),
    Rule,
    Spacer { points: f32 },
    KeyValueGrid { rows: Vec<Vec<KeyValue>> },
    Table(Table),
    PageBreak,
}

impl Block {
    pub fn title(text: impl Into<String>) -> Self {
        Block::Title { text: text.into() }
    }

    pub fn section_heading(text: impl Into<String>) -> Self {
        Block::Heading {
            text: text.into(),
            level: HeadingLevel::Section,
        }
    }

    pub fn sub_heading(text: impl Into<String>) -> Self {
        Block::Heading {
            text: text.into(),
            level: HeadingLevel::Sub,
        }
    }

    pub fn spacer(points: f32) -> Self {
        Block::Spacer { points }
    }

    pub fn is_page_break(&self) -> bool {
        matches!(self, Block::PageBreak)
    }
}

impl From<Paragraph> for Block {
    fn from(paragraph: Paragraph) -> Self {
        Block::Paragraph(paragraph)
    }
}

impl From<Table> for Block {
    fn from(table: Table) -> Self {
        Block::Table(table)
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum HeadingLevel {
    Section,
    Sub,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum TextStyle {
    #[default]
    Body,
    Small,
    Centered,
}

/// Đoạn văn, có thể kèm nhãn in đậm đứng trước (ví dụ "Findings:").
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Paragraph {
    pub label: Option<String>,
    pub text: String,
    pub style: TextStyle,
    /// In đậm toàn bộ đoạn.
    pub emphasis: bool,
    pub indent: u8,
}

impl Paragraph {
    pub fn body(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            ..Self::default()
        }
    }

    pub fn labeled(label: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            label: Some(label.into()),
            text: text.into(),
            ..Self::default()
        }
    }

    pub fn with_style(mut self, style: TextStyle) -> Self {
        self.style = style;
        self
    }

    pub fn emphasized(mut self) -> Self {
        self.emphasis = true;
        self
    }

    pub fn indented(mut self, indent: u8) -> Self {
        self.indent = indent;
        self
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct KeyValue {
    pub key: String,
    pub value: String,
}

impl KeyValue {
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }
}

/// Bảng lưới có hàng tiêu đề.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Table {
    pub header: Vec<String>,
    pub rows: Vec<TableRow>,
    /// Độ rộng cột (point), cùng số phần tử với `header`.
    pub column_widths: Vec<f32>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TableRow {
    pub cells: Vec<String>,
    /// Bậc mức độ để engine tô màu, nếu có.
    pub tone: Option<ScoreLevel>,
}

/// Thông tin trang truyền cho callback chân trang.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct PageContext {
    pub page_number: u32,
}

/// Ba vị trí văn bản ở chân trang.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct PageFooter {
    pub left: String,
    pub center: String,
    pub right: String,
    /// Thời điểm tạo báo cáo (RFC 3339), cùng giá trị với dòng "Generated".
    pub generated_at: String,
}

/// Callback chân trang, engine gọi một lần cho mỗi trang.
pub type FooterFn<'a> = dyn Fn(&PageContext) -> PageFooter + 'a;

/// Engine dựng trang: nhận chuỗi khối và callback chân trang, ghi ra một file.
pub trait RenderEngine {
    fn render(
        &self,
        blocks: &[Block],
        footer: &FooterFn<'_>,
        output: &Path,
    ) -> Result<(), ReportError>;
}

/// Lỗi chung khi tạo báo cáo.
#[derive(Debug, thiserror::Error)]
pub enum ReportError {
    #[error("Không tìm thấy care plan {0}")]
    NotFound(String),
    #[error("Không đọc được dữ liệu: {0}")]
    Parse(String),
    #[error("Lỗi dựng trang: {0}")]
    Render(String),
    #[error("Lỗi ghi file: {0}")]
    Io(#[from] std::io::Error),
}
