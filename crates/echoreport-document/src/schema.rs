// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Exam field schema.
//
// Every identifier the report reads is declared here with the kind of value
// it carries. Raw input is validated against this table once, at the
// boundary (see `FieldSet::from_json`); anything undeclared or of the wrong
// shape is dropped and later reads see it as absent.

/// Identifier of the exam date, also used for the export filename.
pub const EXAM_DATE: &str = "exam_date";
/// Multi-select clinical question group.
pub const CLINICAL_QUESTION: &str = "cq";
/// Trigger for the 17-segment wall-motion expansion.
pub const RWMA_PRESENT: &str = "psax_rwma_present";
/// Multi-select haemodynamic state group.
pub const HAEMO_STATE: &str = "sum_haemo";
/// Free-text comments.
pub const GENERAL_COMMENTS: &str = "general_comments";

/// Value kind expected for a field identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    /// Free text or a pre-formatted value.
    Text,
    /// ISO `YYYY-MM-DD` date.
    Date,
    /// Numeric magnitude rendered with a unit suffix.
    Measurement { unit: &'static str },
    /// Single choice. Booleans are accepted and read as `Yes` / `No`.
    Select,
    /// Checkbox group; selections are kept in declaration order.
    MultiSelect { options: &'static [&'static str] },
}

/// One declared field.
#[derive(Debug, Clone, Copy)]
pub struct FieldSpec {
    pub id: &'static str,
    pub kind: FieldKind,
}

const fn field(id: &'static str, kind: FieldKind) -> FieldSpec {
    FieldSpec { id, kind }
}

const fn measured(id: &'static str, unit: &'static str) -> FieldSpec {
    FieldSpec {
        id,
        kind: FieldKind::Measurement { unit },
    }
}

pub const CLINICAL_QUESTION_OPTIONS: &[&str] = &[
    "Dyspnoea",
    "Syncope",
    "Chest Pain",
    "Hypotension / Shock",
    "Suspected PAH",
    "Known PAH Follow-up",
    "RV Failure",
    "Pericardial Effusion",
    "Fluid Status",
    "Pre-procedure Assessment",
];

pub const HAEMO_STATE_OPTIONS: &[&str] = &[
    "Normal",
    "Hypovolaemic",
    "Cardiogenic",
    "Obstructive",
    "Distributive",
    "RV Pressure Overload",
    "RV Volume Overload",
    "Tamponade Physiology",
];

/// Scalar and multi-select fields. The 17 segment fields live in [`SEGMENTS`].
pub const FIELDS: &[FieldSpec] = &[
    // Patient information
    field(EXAM_DATE, FieldKind::Date),
    field("operator", FieldKind::Text),
    // Clinical question
    field(
        CLINICAL_QUESTION,
        FieldKind::MultiSelect {
            options: CLINICAL_QUESTION_OPTIONS,
        },
    ),
    // Parasternal long axis
    field("plax_eff", FieldKind::Select),
    measured("plax_lv_edd", "cm"),
    field("plax_mr", FieldKind::Select),
    measured("plax_mr_vc", "mm"),
    field("plax_ar", FieldKind::Select),
    measured("plax_ar_vc", "mm"),
    measured("plax_lv_lvot_d", "cm"),
    measured("plax_rvsp", "mmHg"),
    // Parasternal short axis
    field("psax_av_tri", FieldKind::Select),
    field("psax_septum", FieldKind::Select),
    field("psax_lv_collapse", FieldKind::Select),
    field(RWMA_PRESENT, FieldKind::Select),
    // Apical
    field("ap_tapse_select", FieldKind::Select),
    measured("ap_tapse_val", "mm"),
    measured("ap_rv_fac", "%"),
    field("ap_lv_ef", FieldKind::Select),
    measured("ap_lvot_vti", "cm"),
    measured("ap_tr_vmax", "m/s"),
    // Subcostal
    field("sub_eff", FieldKind::Select),
    measured("sub_ivc_d", "cm"),
    field("sub_ivc_v", FieldKind::Select),
    // Summary
    field("sum_lv_size", FieldKind::Select),
    field("sum_lv_func", FieldKind::Select),
    field("sum_rv_size", FieldKind::Select),
    field("sum_rv_func", FieldKind::Select),
    field("sum_v_mit", FieldKind::Select),
    field("sum_v_aor", FieldKind::Select),
    field(
        HAEMO_STATE,
        FieldKind::MultiSelect {
            options: HAEMO_STATE_OPTIONS,
        },
    ),
    field(GENERAL_COMMENTS, FieldKind::Text),
];

/// One left-ventricular segment of the 17-segment model.
#[derive(Debug, Clone, Copy)]
pub struct SegmentDefinition {
    pub label: &'static str,
    pub field: &'static str,
    /// Baseline value; a segment reading equal to this is not reported.
    pub normal: &'static str,
}

const fn segment(label: &'static str, field: &'static str) -> SegmentDefinition {
    SegmentDefinition {
        label,
        field,
        normal: "Normal",
    }
}

/// The 17 segments in standard numbering order.
pub static SEGMENTS: [SegmentDefinition; 17] = [
    segment("Basal Anterior", "rwma_seg_1"),
    segment("Basal Anteroseptal", "rwma_seg_2"),
    segment("Basal Inferoseptal", "rwma_seg_3"),
    segment("Basal Inferior", "rwma_seg_4"),
    segment("Basal Inferolateral", "rwma_seg_5"),
    segment("Basal Anterolateral", "rwma_seg_6"),
    segment("Mid Anterior", "rwma_seg_7"),
    segment("Mid Anteroseptal", "rwma_seg_8"),
    segment("Mid Inferoseptal", "rwma_seg_9"),
    segment("Mid Inferior", "rwma_seg_10"),
    segment("Mid Inferolateral", "rwma_seg_11"),
    segment("Mid Anterolateral", "rwma_seg_12"),
    segment("Apical Anterior", "rwma_seg_13"),
    segment("Apical Septal", "rwma_seg_14"),
    segment("Apical Inferior", "rwma_seg_15"),
    segment("Apical Lateral", "rwma_seg_16"),
    segment("Apex", "rwma_seg_17"),
];

/// Declared kind of `id`, or `None` for an unknown identifier.
pub fn lookup(id: &str) -> Option<FieldKind> {
    FIELDS
        .iter()
        .find(|spec| spec.id == id)
        .map(|spec| spec.kind)
        .or_else(|| {
            SEGMENTS
                .iter()
                .any(|seg| seg.field == id)
                .then_some(FieldKind::Select)
        })
}
