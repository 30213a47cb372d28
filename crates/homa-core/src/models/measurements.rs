use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Raw clinical values recorded for one assessment.
///
/// Every field is optional. Field names double as storage column names, so
/// renaming one is a schema change.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct MeasurementSet {
    // Anthropometric
    #[serde(default, alias = "height")]
    pub height_cm: Option<f64>,
    #[serde(default, alias = "weight")]
    pub weight_kg: Option<f64>,
    #[serde(default, alias = "waist_circumference")]
    pub waist_cm: Option<f64>,

    // Vitals
    #[serde(default)]
    pub systolic_bp: Option<f64>,
    #[serde(default)]
    pub diastolic_bp: Option<f64>,
    #[serde(default)]
    pub heart_rate: Option<f64>,

    // Metabolic panel
    #[serde(default)]
    pub fasting_glucose: Option<f64>,
    #[serde(default)]
    pub fasting_insulin: Option<f64>,
    #[serde(default)]
    pub hba1c: Option<f64>,
    #[serde(default)]
    pub c_peptide: Option<f64>,
    #[serde(default)]
    pub post_lunch_blood_sugar: Option<f64>,

    // Lipid profile
    #[serde(default)]
    pub total_cholesterol: Option<f64>,
    #[serde(default)]
    pub ldl_cholesterol: Option<f64>,
    #[serde(default)]
    pub hdl_cholesterol: Option<f64>,
    #[serde(default)]
    pub triglycerides: Option<f64>,
    #[serde(default)]
    pub vldl_cholesterol: Option<f64>,

    // CBC
    #[serde(default)]
    pub hemoglobin: Option<f64>,
    #[serde(default)]
    pub hematocrit: Option<f64>,
    #[serde(default)]
    pub rbc_count: Option<f64>,
    #[serde(default)]
    pub wbc_count: Option<f64>,
    #[serde(default)]
    pub platelet_count: Option<f64>,

    // LFT
    #[serde(default)]
    pub sgpt_alt: Option<f64>,
    #[serde(default)]
    pub sgot_ast: Option<f64>,
    #[serde(default)]
    pub alkaline_phosphatase: Option<f64>,
    #[serde(default)]
    pub total_bilirubin: Option<f64>,

    // KFT
    #[serde(default)]
    pub creatinine: Option<f64>,
    #[serde(default)]
    pub blood_urea: Option<f64>,
    #[serde(default)]
    pub uric_acid: Option<f64>,

    // TFT
    #[serde(default)]
    pub tsh: Option<f64>,
    #[serde(default)]
    pub t3: Option<f64>,
    #[serde(default)]
    pub t4: Option<f64>,

    // Personal history
    #[serde(default)]
    pub history_cag: Option<bool>,
    #[serde(default)]
    pub history_ptca: Option<bool>,
    #[serde(default)]
    pub history_cva: Option<bool>,
    #[serde(default)]
    pub history_alcohol: Option<bool>,
    #[serde(default)]
    pub history_smoker: Option<bool>,
    #[serde(default)]
    pub history_drugs: Option<bool>,
    #[serde(default)]
    pub history_menopause: Option<bool>,
    #[serde(default)]
    pub history_cancer: Option<bool>,

    // Family history
    #[serde(default)]
    pub family_diabetes: Option<bool>,
    #[serde(default)]
    pub family_hypertension: Option<bool>,
    #[serde(default)]
    pub family_heart_disease: Option<bool>,
}

/// Every numeric field of a [`MeasurementSet`], in form order.
///
/// This is the allow-list used wherever fields are addressed by name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum NumericField {
    HeightCm,
    WeightKg,
    WaistCm,
    SystolicBp,
    DiastolicBp,
    HeartRate,
    FastingGlucose,
    FastingInsulin,
    Hba1c,
    CPeptide,
    PostLunchBloodSugar,
    TotalCholesterol,
    LdlCholesterol,
    HdlCholesterol,
    Triglycerides,
    VldlCholesterol,
    Hemoglobin,
    Hematocrit,
    RbcCount,
    WbcCount,
    PlateletCount,
    SgptAlt,
    SgotAst,
    AlkalinePhosphatase,
    TotalBilirubin,
    Creatinine,
    BloodUrea,
    UricAcid,
    Tsh,
    T3,
    T4,
}

impl NumericField {
    pub const ALL: [NumericField; 31] = [
        Self::HeightCm,
        Self::WeightKg,
        Self::WaistCm,
        Self::SystolicBp,
        Self::DiastolicBp,
        Self::HeartRate,
        Self::FastingGlucose,
        Self::FastingInsulin,
        Self::Hba1c,
        Self::CPeptide,
        Self::PostLunchBloodSugar,
        Self::TotalCholesterol,
        Self::LdlCholesterol,
        Self::HdlCholesterol,
        Self::Triglycerides,
        Self::VldlCholesterol,
        Self::Hemoglobin,
        Self::Hematocrit,
        Self::RbcCount,
        Self::WbcCount,
        Self::PlateletCount,
        Self::SgptAlt,
        Self::SgotAst,
        Self::AlkalinePhosphatase,
        Self::TotalBilirubin,
        Self::Creatinine,
        Self::BloodUrea,
        Self::UricAcid,
        Self::Tsh,
        Self::T3,
        Self::T4,
    ];

    /// Snake-case name; identical to the serde field name and the column name.
    pub fn name(self) -> &'static str {
        match self {
            Self::HeightCm => "height_cm",
            Self::WeightKg => "weight_kg",
            Self::WaistCm => "waist_cm",
            Self::SystolicBp => "systolic_bp",
            Self::DiastolicBp => "diastolic_bp",
            Self::HeartRate => "heart_rate",
            Self::FastingGlucose => "fasting_glucose",
            Self::FastingInsulin => "fasting_insulin",
            Self::Hba1c => "hba1c",
            Self::CPeptide => "c_peptide",
            Self::PostLunchBloodSugar => "post_lunch_blood_sugar",
            Self::TotalCholesterol => "total_cholesterol",
            Self::LdlCholesterol => "ldl_cholesterol",
            Self::HdlCholesterol => "hdl_cholesterol",
            Self::Triglycerides => "triglycerides",
            Self::VldlCholesterol => "vldl_cholesterol",
            Self::Hemoglobin => "hemoglobin",
            Self::Hematocrit => "hematocrit",
            Self::RbcCount => "rbc_count",
            Self::WbcCount => "wbc_count",
            Self::PlateletCount => "platelet_count",
            Self::SgptAlt => "sgpt_alt",
            Self::SgotAst => "sgot_ast",
            Self::AlkalinePhosphatase => "alkaline_phosphatase",
            Self::TotalBilirubin => "total_bilirubin",
            Self::Creatinine => "creatinine",
            Self::BloodUrea => "blood_urea",
            Self::UricAcid => "uric_acid",
            Self::Tsh => "tsh",
            Self::T3 => "t3",
            Self::T4 => "t4",
        }
    }

    /// Human-readable label with unit, for reports.
    pub fn label(self) -> &'static str {
        match self {
            Self::HeightCm => "Height (cm)",
            Self::WeightKg => "Weight (kg)",
            Self::WaistCm => "Waist circumference (cm)",
            Self::SystolicBp => "Systolic BP (mmHg)",
            Self::DiastolicBp => "Diastolic BP (mmHg)",
            Self::HeartRate => "Heart rate (bpm)",
            Self::FastingGlucose => "Fasting glucose (mg/dL)",
            Self::FastingInsulin => "Fasting insulin (µIU/mL)",
            Self::Hba1c => "HbA1c (%)",
            Self::CPeptide => "C-peptide (ng/mL)",
            Self::PostLunchBloodSugar => "Post-lunch blood sugar (mg/dL)",
            Self::TotalCholesterol => "Total cholesterol (mg/dL)",
            Self::LdlCholesterol => "LDL cholesterol (mg/dL)",
            Self::HdlCholesterol => "HDL cholesterol (mg/dL)",
            Self::Triglycerides => "Triglycerides (mg/dL)",
            Self::VldlCholesterol => "VLDL cholesterol (mg/dL)",
            Self::Hemoglobin => "Hemoglobin (g/dL)",
            Self::Hematocrit => "Hematocrit (%)",
            Self::RbcCount => "RBC count (million/µL)",
            Self::WbcCount => "WBC count (thousand/µL)",
            Self::PlateletCount => "Platelet count (thousand/µL)",
            Self::SgptAlt => "SGPT / ALT (U/L)",
            Self::SgotAst => "SGOT / AST (U/L)",
            Self::AlkalinePhosphatase => "Alkaline phosphatase (U/L)",
            Self::TotalBilirubin => "Total bilirubin (mg/dL)",
            Self::Creatinine => "Creatinine (mg/dL)",
            Self::BloodUrea => "Blood urea (mg/dL)",
            Self::UricAcid => "Uric acid (mg/dL)",
            Self::Tsh => "TSH (µIU/mL)",
            Self::T3 => "T3 (ng/dL)",
            Self::T4 => "T4 (µg/dL)",
        }
    }

    pub fn get(self, m: &MeasurementSet) -> Option<f64> {
        *self.slot(m)
    }

    pub fn set(self, m: &mut MeasurementSet, value: Option<f64>) {
        *self.slot_mut(m) = value;
    }

    fn slot(self, m: &MeasurementSet) -> &Option<f64> {
        match self {
            Self::HeightCm => &m.height_cm,
            Self::WeightKg => &m.weight_kg,
            Self::WaistCm => &m.waist_cm,
            Self::SystolicBp => &m.systolic_bp,
            Self::DiastolicBp => &m.diastolic_bp,
            Self::HeartRate => &m.heart_rate,
            Self::FastingGlucose => &m.fasting_glucose,
            Self::FastingInsulin => &m.fasting_insulin,
            Self::Hba1c => &m.hba1c,
            Self::CPeptide => &m.c_peptide,
            Self::PostLunchBloodSugar => &m.post_lunch_blood_sugar,
            Self::TotalCholesterol => &m.total_cholesterol,
            Self::LdlCholesterol => &m.ldl_cholesterol,
            Self::HdlCholesterol => &m.hdl_cholesterol,
            Self::Triglycerides => &m.triglycerides,
            Self::VldlCholesterol => &m.vldl_cholesterol,
            Self::Hemoglobin => &m.hemoglobin,
            Self::Hematocrit => &m.hematocrit,
            Self::RbcCount => &m.rbc_count,
            Self::WbcCount => &m.wbc_count,
            Self::PlateletCount => &m.platelet_count,
            Self::SgptAlt => &m.sgpt_alt,
            Self::SgotAst => &m.sgot_ast,
            Self::AlkalinePhosphatase => &m.alkaline_phosphatase,
            Self::TotalBilirubin => &m.total_bilirubin,
            Self::Creatinine => &m.creatinine,
            Self::BloodUrea => &m.blood_urea,
            Self::UricAcid => &m.uric_acid,
            Self::Tsh => &m.tsh,
            Self::T3 => &m.t3,
            Self::T4 => &m.t4,
        }
    }

    fn slot_mut(self, m: &mut MeasurementSet) -> &mut Option<f64> {
        match self {
            Self::HeightCm => &mut m.height_cm,
            Self::WeightKg => &mut m.weight_kg,
            Self::WaistCm => &mut m.waist_cm,
            Self::SystolicBp => &mut m.systolic_bp,
            Self::DiastolicBp => &mut m.diastolic_bp,
            Self::HeartRate => &mut m.heart_rate,
            Self::FastingGlucose => &mut m.fasting_glucose,
            Self::FastingInsulin => &mut m.fasting_insulin,
            Self::Hba1c => &mut m.hba1c,
            Self::CPeptide => &mut m.c_peptide,
            Self::PostLunchBloodSugar => &mut m.post_lunch_blood_sugar,
            Self::TotalCholesterol => &mut m.total_cholesterol,
            Self::LdlCholesterol => &mut m.ldl_cholesterol,
            Self::HdlCholesterol => &mut m.hdl_cholesterol,
            Self::Triglycerides => &mut m.triglycerides,
            Self::VldlCholesterol => &mut m.vldl_cholesterol,
            Self::Hemoglobin => &mut m.hemoglobin,
            Self::Hematocrit => &mut m.hematocrit,
            Self::RbcCount => &mut m.rbc_count,
            Self::WbcCount => &mut m.wbc_count,
            Self::PlateletCount => &mut m.platelet_count,
            Self::SgptAlt => &mut m.sgpt_alt,
            Self::SgotAst => &mut m.sgot_ast,
            Self::AlkalinePhosphatase => &mut m.alkaline_phosphatase,
            Self::TotalBilirubin => &mut m.total_bilirubin,
            Self::Creatinine => &mut m.creatinine,
            Self::BloodUrea => &mut m.blood_urea,
            Self::UricAcid => &mut m.uric_acid,
            Self::Tsh => &mut m.tsh,
            Self::T3 => &mut m.t3,
            Self::T4 => &mut m.t4,
        }
    }
}

/// Whether a history flag describes the patient or their family.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum HistoryKind {
    Personal,
    Family,
}

/// Every tick-box field of a [`MeasurementSet`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum HistoryFlag {
    HistoryCag,
    HistoryPtca,
    HistoryCva,
    HistoryAlcohol,
    HistorySmoker,
    HistoryDrugs,
    HistoryMenopause,
    HistoryCancer,
    FamilyDiabetes,
    FamilyHypertension,
    FamilyHeartDisease,
}

impl HistoryFlag {
    pub const ALL: [HistoryFlag; 11] = [
        Self::HistoryCag,
        Self::HistoryPtca,
        Self::HistoryCva,
        Self::HistoryAlcohol,
        Self::HistorySmoker,
        Self::HistoryDrugs,
        Self::HistoryMenopause,
        Self::HistoryCancer,
        Self::FamilyDiabetes,
        Self::FamilyHypertension,
        Self::FamilyHeartDisease,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Self::HistoryCag => "history_cag",
            Self::HistoryPtca => "history_ptca",
            Self::HistoryCva => "history_cva",
            Self::HistoryAlcohol => "history_alcohol",
            Self::HistorySmoker => "history_smoker",
            Self::HistoryDrugs => "history_drugs",
            Self::HistoryMenopause => "history_menopause",
            Self::HistoryCancer => "history_cancer",
            Self::FamilyDiabetes => "family_diabetes",
            Self::FamilyHypertension => "family_hypertension",
            Self::FamilyHeartDisease => "family_heart_disease",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::HistoryCag => "Coronary angiography (CAG)",
            Self::HistoryPtca => "Angioplasty (PTCA)",
            Self::HistoryCva => "Stroke (CVA)",
            Self::HistoryAlcohol => "Alcohol use",
            Self::HistorySmoker => "Smoker",
            Self::HistoryDrugs => "Recreational drug use",
            Self::HistoryMenopause => "Menopause",
            Self::HistoryCancer => "Cancer",
            Self::FamilyDiabetes => "Family history of diabetes",
            Self::FamilyHypertension => "Family history of hypertension",
            Self::FamilyHeartDisease => "Family history of heart disease",
        }
    }

    pub fn kind(self) -> HistoryKind {
        match self {
            Self::FamilyDiabetes | Self::FamilyHypertension | Self::FamilyHeartDisease => {
                HistoryKind::Family
            }
            _ => HistoryKind::Personal,
        }
    }

    pub fn get(self, m: &MeasurementSet) -> Option<bool> {
        *self.slot(m)
    }

    pub fn set(self, m: &mut MeasurementSet, value: Option<bool>) {
        *self.slot_mut(m) = value;
    }

    /// Absent flags count as unticked.
    pub fn is_set(self, m: &MeasurementSet) -> bool {
        self.get(m).unwrap_or(false)
    }

    fn slot(self, m: &MeasurementSet) -> &Option<bool> {
        match self {
            Self::HistoryCag => &m.history_cag,
            Self::HistoryPtca => &m.history_ptca,
            Self::HistoryCva => &m.history_cva,
            Self::HistoryAlcohol => &m.history_alcohol,
            Self::HistorySmoker => &m.history_smoker,
            Self::HistoryDrugs => &m.history_drugs,
            Self::HistoryMenopause => &m.history_menopause,
            Self::HistoryCancer => &m.history_cancer,
            Self::FamilyDiabetes => &m.family_diabetes,
            Self::FamilyHypertension => &m.family_hypertension,
            Self::FamilyHeartDisease => &m.family_heart_disease,
        }
    }

    fn slot_mut(self, m: &mut MeasurementSet) -> &mut Option<bool> {
        match self {
            Self::HistoryCag => &mut m.history_cag,
            Self::HistoryPtca => &mut m.history_ptca,
            Self::HistoryCva => &mut m.history_cva,
            Self::HistoryAlcohol => &mut m.history_alcohol,
            Self::HistorySmoker => &mut m.history_smoker,
            Self::HistoryDrugs => &mut m.history_drugs,
            Self::HistoryMenopause => &mut m.history_menopause,
            Self::HistoryCancer => &mut m.history_cancer,
            Self::FamilyDiabetes => &mut m.family_diabetes,
            Self::FamilyHypertension => &mut m.family_hypertension,
            Self::FamilyHeartDisease => &mut m.family_heart_disease,
        }
    }
}
