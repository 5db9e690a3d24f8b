// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// End-to-end: field set -> layout -> PDF bytes, re-opened with lopdf.

use echoreport_core::ReportConfig;
use echoreport_document::{FieldSet, PdfWriter, ReportAssembler};
use serde_json::json;

fn complete_exam() -> FieldSet {
    FieldSet::from_json(&json!({
        "exam_date": "2024-03-07",
        "operator": "Dr A. Sonographer",
        "cq": ["Suspected PAH", "Dyspnoea"],
        "plax_eff": "None",
        "plax_lv_edd": "4.6",
        "plax_mr": "Trace",
        "plax_ar": "None",
        "plax_lv_lvot_d": "2.1",
        "plax_rvsp": "62",
        "psax_av_tri": "Yes",
        "psax_septum": "Flattened (D-shape)",
        "psax_lv_collapse": "No",
        "psax_rwma_present": "Yes",
        "rwma_seg_2": "Hypokinetic",
        "rwma_seg_3": "Hypokinetic",
        "rwma_seg_9": "Akinetic",
        "ap_tapse_select": "Reduced",
        "ap_tapse_val": "13",
        "ap_rv_fac": "28",
        "ap_lv_ef": "Normal (>55%)",
        "ap_lvot_vti": "14",
        "ap_tr_vmax": "3.9",
        "sub_eff": "Small",
        "sub_ivc_d": "2.4",
        "sub_ivc_v": "<50%",
        "sum_lv_size": "Normal",
        "sum_lv_func": "Normal",
        "sum_rv_size": "Severely dilated",
        "sum_rv_func": "Severely impaired",
        "sum_v_mit": "Trace MR",
        "sum_v_aor": "None",
        "sum_haemo": ["RV Pressure Overload"],
        "general_comments": "Findings consistent with pulmonary hypertension. Recommend formal echo.",
    }))
    .expect("valid exam")
}

#[test]
fn pdf_page_count_matches_model() {
    let config = ReportConfig::default();
    let document = ReportAssembler::new(&config).assemble(&complete_exam());
    let bytes = PdfWriter::new().render(&document).expect("render PDF");

    let reopened = lopdf::Document::load_mem(&bytes).expect("lopdf can parse output");
    assert_eq!(reopened.get_pages().len(), document.page_count());
}

#[test]
fn multi_page_report_round_trips_through_lopdf() {
    let config = ReportConfig::default();
    let mut raw = json!({ "exam_date": "2024-03-07" });
    raw["general_comments"] = json!("Serial assessment recorded. ".repeat(400));
    let fields = FieldSet::from_json(&raw).expect("valid exam");

    let document = ReportAssembler::new(&config).assemble(&fields);
    assert!(document.page_count() > 1);

    let bytes = PdfWriter::new().render(&document).expect("render PDF");
    let reopened = lopdf::Document::load_mem(&bytes).expect("lopdf can parse output");
    assert_eq!(reopened.get_pages().len(), document.page_count());
}

#[test]
fn complete_exam_content() {
    let config = ReportConfig::default();
    let document = ReportAssembler::new(&config).assemble(&complete_exam());

    assert!(document.contains_text("Exam Date: 07/03/2024"));
    assert!(document.contains_text("Indication: Dyspnoea, Suspected PAH"));
    assert!(document.contains_text("62 mmHg"));
    assert!(document.contains_text("Reduced (13 mm)"));
    assert!(document.contains_text("\u{2022} Basal Anteroseptal: Hypokinetic"));
    assert!(document.contains_text("\u{2022} Mid Inferoseptal: Akinetic"));
    assert!(document.contains_text("Severely dilated / Severely impaired"));
    assert!(document.contains_text("Mitral: Trace MR | Aortic: None"));
    assert!(!document.contains_text("MV VC:"));
}

#[test]
fn extracted_pdf_text_is_legible() {
    let config = ReportConfig::default();
    let fields = FieldSet::from_json(&json!({
        "psax_rwma_present": "Yes",
        "rwma_seg_1": "Hypokinetic",
        "general_comments": "Dilaté RV – see café note",
    }))
    .expect("valid exam");
    let document = ReportAssembler::new(&config).assemble(&fields);
    let bytes = PdfWriter::new().render(&document).expect("render PDF");

    let reopened = lopdf::Document::load_mem(&bytes).expect("lopdf can parse output");
    let text = reopened.extract_text(&[1]).expect("extract page text");
    assert!(text.contains("- Basal Anterior: Hypokinetic"), "got {text:?}");
    assert!(text.contains("Dilate RV - see cafe note"), "got {text:?}");
    assert!(!text.contains('\u{e2}'));
}
