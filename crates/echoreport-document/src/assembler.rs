// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Report assembler: lays out the whole echo report in a fixed order:
// title, patient information, clinical question, examination views, and the
// summary findings.

use echoreport_core::ReportConfig;
use tracing::{debug, info, instrument};

use crate::fields::{DATE_MASK, FieldSet};
use crate::layout::{Canvas, Column, FieldFormatter, LayoutCursor, SectionRenderer, SegmentExpander};
use crate::model::{FontWeight, RenderedDocument};
use crate::schema::{CLINICAL_QUESTION, EXAM_DATE, GENERAL_COMMENTS, HAEMO_STATE};

const TITLE_ADVANCE: f32 = 10.0;
const PATIENT_LINE_ADVANCE: f32 = 8.0;
const COMMENTS_GAP: f32 = 4.0;
/// Gap after the last examination row, wider than between sub-sections.
const EXAMINATION_END_GAP: f32 = 5.0;

const PATIENT_NAME_BLANK: &str = "Patient Name / DOB: ___________________________________";
const MRN_BLANK: &str = "MRN: _______________________";
const NO_CLINICAL_QUESTION: &str = "No specific clinical question selected.";
const NO_COMMENTS: &str = "None recorded.";

/// Builds a `RenderedDocument` from a field set.
pub struct ReportAssembler<'a> {
    config: &'a ReportConfig,
}

impl<'a> ReportAssembler<'a> {
    pub fn new(config: &'a ReportConfig) -> Self {
        Self { config }
    }

    /// Run one complete layout pass.
    #[instrument(skip_all, fields(fields = fields.len()))]
    pub fn assemble(&self, fields: &FieldSet) -> RenderedDocument {
        let layout = &self.config.layout;
        let mut pass = Pass {
            config: self.config,
            fields,
            canvas: Canvas::new(
                LayoutCursor::from_config(layout, self.config.paper_size),
                RenderedDocument::new(self.config.share_title.as_str(), self.config.paper_size),
            ),
            sections: SectionRenderer::new(layout),
            formatter: FieldFormatter::new(layout),
            segments: SegmentExpander::new(layout),
        };

        pass.title();
        pass.patient_information();
        pass.clinical_question();
        pass.examination();
        pass.summary();

        let document = pass.canvas.finish();
        info!(pages = document.page_count(), "report assembled");
        document
    }
}

/// State of one layout pass.
struct Pass<'a> {
    config: &'a ReportConfig,
    fields: &'a FieldSet,
    canvas: Canvas,
    sections: SectionRenderer<'a>,
    formatter: FieldFormatter<'a>,
    segments: SegmentExpander<'a>,
}

impl Pass<'_> {
    fn text(&self, id: &str) -> Option<String> {
        self.fields.text(id).map(str::to_owned)
    }

    fn measured(&self, id: &str) -> Option<String> {
        self.fields.measurement(id, self.config.unit_policy)
    }

    /// Two-column row of inline fields.
    fn row(&mut self, left: (&str, Option<String>), right: Option<(&str, Option<String>)>) {
        self.formatter.render_row(
            &mut self.canvas,
            (left.0, left.1.as_deref()),
            right.as_ref().map(|(label, value)| (*label, value.as_deref())),
        );
    }

    fn end_sub_section(&mut self) {
        self.canvas.advance(self.config.layout.section_gap);
    }

    // -- Title and patient information ---------------------------------------

    fn title(&mut self) {
        let layout = &self.config.layout;
        self.canvas.text(
            layout.margin_left,
            self.config.report_title.as_str(),
            layout.title_font_size,
            FontWeight::Bold,
        );
        self.canvas.advance(TITLE_ADVANCE);
    }

    fn patient_information(&mut self) {
        let layout = &self.config.layout;
        self.sections.render_super_header(&mut self.canvas, "Patient Information");

        // Identifiers are handwritten on the printout and never stored.
        self.canvas.ensure_space(PATIENT_LINE_ADVANCE);
        self.canvas.text(
            layout.margin_left,
            PATIENT_NAME_BLANK,
            layout.patient_font_size,
            FontWeight::Regular,
        );
        self.canvas.advance(PATIENT_LINE_ADVANCE);

        let exam_date = self
            .fields
            .display_date(EXAM_DATE)
            .unwrap_or_else(|| DATE_MASK.to_owned());
        self.canvas.ensure_space(PATIENT_LINE_ADVANCE);
        self.canvas.text(
            layout.margin_left,
            MRN_BLANK,
            layout.patient_font_size,
            FontWeight::Regular,
        );
        self.canvas.text(
            layout.right_column_x,
            format!("Exam Date: {exam_date}"),
            layout.patient_font_size,
            FontWeight::Regular,
        );
        self.canvas.advance(PATIENT_LINE_ADVANCE);

        let operator = self.text("operator");
        self.row(("Operator", operator), None);
    }

    // -- Clinical question ---------------------------------------------------

    fn clinical_question(&mut self) {
        let layout = &self.config.layout;
        self.sections.render_super_header(&mut self.canvas, "Clinical Question");

        match self.fields.joined_choices(CLINICAL_QUESTION) {
            Some(joined) => {
                self.formatter.render_field(
                    &mut self.canvas,
                    "Indication",
                    Some(&joined),
                    Column::Left,
                    true,
                );
            }
            None => {
                self.canvas.ensure_space(layout.line_height);
                self.canvas.text(
                    layout.margin_left,
                    NO_CLINICAL_QUESTION,
                    layout.body_font_size,
                    FontWeight::Regular,
                );
                self.canvas.advance(layout.line_height);
            }
        }
    }

    // -- Examination ---------------------------------------------------------

    fn examination(&mut self) {
        self.sections.render_super_header(&mut self.canvas, "Examination");
        self.parasternal_long_axis();
        self.parasternal_short_axis();
        self.apical();
        self.subcostal();
    }

    fn parasternal_long_axis(&mut self) {
        self.sections.render_sub_header(
            &mut self.canvas,
            "Parasternal Long-Axis View (LV & RV Inflow)",
        );
        self.row(
            ("Effusion", self.text("plax_eff")),
            Some(("LVEDD", self.measured("plax_lv_edd"))),
        );
        self.row(
            ("MV Regurg", self.text("plax_mr")),
            Some(("MV VC", self.measured("plax_mr_vc"))),
        );
        self.row(
            ("AV Regurg", self.text("plax_ar")),
            Some(("AV VC", self.measured("plax_ar_vc"))),
        );
        self.row(
            ("LVOT Diam", self.measured("plax_lv_lvot_d")),
            Some(("RVSP", self.measured("plax_rvsp"))),
        );
        self.end_sub_section();
    }

    fn parasternal_short_axis(&mut self) {
        self.sections.render_sub_header(
            &mut self.canvas,
            "Parasternal Short-Axis View (AV & Mid-Pap)",
        );
        self.row(
            ("AV Trileaflet", self.text("psax_av_tri")),
            Some(("RV Septum", self.text("psax_septum"))),
        );
        self.row(
            ("LV Collapse", self.text("psax_lv_collapse")),
            Some(("RWMA", self.text("psax_rwma_present"))),
        );
        let bullets = self.segments.render(&mut self.canvas, self.fields);
        debug!(bullets, "short-axis view laid out");
        self.end_sub_section();
    }

    fn apical(&mut self) {
        self.sections.render_sub_header(&mut self.canvas, "Apical Views");
        let tapse = match (self.text("ap_tapse_select"), self.measured("ap_tapse_val")) {
            (Some(grade), Some(value)) => Some(format!("{grade} ({value})")),
            (grade, value) => grade.or(value),
        };
        self.row(
            ("TAPSE", tapse),
            Some(("RV FAC", self.measured("ap_rv_fac"))),
        );
        self.row(
            ("LV EF", self.text("ap_lv_ef")),
            Some(("LVOT VTI", self.measured("ap_lvot_vti"))),
        );
        self.row(("TR Vmax", self.measured("ap_tr_vmax")), None);
        self.end_sub_section();
    }

    fn subcostal(&mut self) {
        self.sections.render_sub_header(&mut self.canvas, "Subcostal View & IVC");
        self.row(
            ("Pericard. Effusion", self.text("sub_eff")),
            Some(("IVC Diameter", self.measured("sub_ivc_d"))),
        );
        self.row(("IVC Variation", self.text("sub_ivc_v")), None);
        self.canvas.advance(EXAMINATION_END_GAP);
    }

    // -- Summary -------------------------------------------------------------

    fn summary(&mut self) {
        self.sections.render_super_header(&mut self.canvas, "Summary Findings");

        self.sections.render_sub_header(&mut self.canvas, "Chambers");
        let lv = join_present([self.text("sum_lv_size"), self.text("sum_lv_func")], " / ");
        let rv = join_present([self.text("sum_rv_size"), self.text("sum_rv_func")], " / ");
        self.summary_row("LV Size/Function", lv);
        self.summary_row("RV Size/Function", rv);

        self.sections.render_sub_header(&mut self.canvas, "Valves");
        let valves = join_present(
            [
                self.text("sum_v_mit").map(|v| format!("Mitral: {v}")),
                self.text("sum_v_aor").map(|v| format!("Aortic: {v}")),
            ],
            " | ",
        );
        self.summary_row("Valvulopathy", valves);

        self.sections.render_sub_header(&mut self.canvas, "Final Assessment");
        let state = self.fields.joined_choices(HAEMO_STATE);
        self.summary_row("Primary State", state);

        self.canvas.advance(COMMENTS_GAP);
        self.formatter.render_text_block(
            &mut self.canvas,
            "General Comments",
            self.fields.text(GENERAL_COMMENTS),
            NO_COMMENTS,
        );
    }

    fn summary_row(&mut self, label: &str, value: Option<String>) {
        self.formatter
            .render_summary_row(&mut self.canvas, label, value.as_deref());
    }
}

/// Join the parts that are present; `None` when none are.
fn join_present<const N: usize>(parts: [Option<String>; N], separator: &str) -> Option<String> {
    let present: Vec<String> = parts.into_iter().flatten().collect();
    (!present.is_empty()).then(|| present.join(separator))
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use echoreport_core::PaperSize;

    use super::*;
    use crate::model::Primitive;

    fn assemble(raw: serde_json::Value) -> RenderedDocument {
        let config = ReportConfig::default();
        let fields = FieldSet::from_json(&raw).expect("valid field set");
        ReportAssembler::new(&config).assemble(&fields)
    }

    fn text_positions(doc: &RenderedDocument) -> Vec<(usize, f32, f32, String)> {
        doc.pages()
            .iter()
            .enumerate()
            .flat_map(|(page, p)| {
                p.primitives.iter().filter_map(move |prim| match prim {
                    Primitive::Text { x, y, text, .. } => Some((page, *x, *y, text.clone())),
                    _ => None,
                })
            })
            .collect()
    }

    #[test]
    fn empty_form_renders_skeleton_only() {
        let doc = assemble(json!({}));
        assert_eq!(doc.page_count(), 1);
        assert!(doc.contains_text("POCUS PAH CARDIAC ECHO REPORT"));
        assert!(doc.contains_text("PATIENT INFORMATION"));
        assert!(doc.contains_text("EXAMINATION"));
        assert!(doc.contains_text("Apical Views"));
        assert!(doc.contains_text("Exam Date: ____/____/____"));
        assert!(doc.contains_text(NO_CLINICAL_QUESTION));
        assert!(doc.contains_text(NO_COMMENTS));
        assert!(!doc.contains_text("Effusion:"));
        assert!(!doc.contains_text("Operator:"));
        assert!(!doc.contains_text("LV Size/Function:"));
    }

    #[test]
    fn suppressed_fields_leave_no_label() {
        let doc = assemble(json!({
            "plax_eff": "Not Assessed",
            "plax_mr": "",
            "plax_lv_lvot_d": "",
            "sum_lv_size": "Not Assessed",
            "ap_lv_ef": "Normal (>55%)",
        }));
        assert!(!doc.contains_text("Effusion:"));
        assert!(!doc.contains_text("MV Regurg:"));
        assert!(!doc.contains_text("LVOT Diam:"));
        assert!(!doc.contains_text("LV Size/Function:"));
        assert!(doc.contains_text("LV EF:"));
        assert!(doc.contains_text("Normal (>55%)"));
    }

    #[test]
    fn exam_date_is_reformatted() {
        let doc = assemble(json!({ "exam_date": "2024-03-07" }));
        assert!(doc.contains_text("Exam Date: 07/03/2024"));

        let malformed = assemble(json!({ "exam_date": "March 7th" }));
        assert!(malformed.contains_text("Exam Date: ____/____/____"));
    }

    #[test]
    fn clinical_question_is_joined_in_declaration_order() {
        let doc = assemble(json!({ "cq": ["Syncope", "Dyspnoea"] }));
        assert!(doc.contains_text("Indication: Dyspnoea, Syncope"));
        assert!(!doc.contains_text(NO_CLINICAL_QUESTION));
    }

    #[test]
    fn measurements_carry_units() {
        let doc = assemble(json!({
            "plax_rvsp": "52",
            "ap_tapse_select": "Reduced",
            "ap_tapse_val": 14,
            "ap_tr_vmax": "3.4",
        }));
        assert!(doc.contains_text("52 mmHg"));
        assert!(doc.contains_text("Reduced (14 mm)"));
        assert!(doc.contains_text("3.4 m/s"));
    }

    #[test]
    fn composite_summary_values_skip_missing_parts() {
        let doc = assemble(json!({
            "sum_lv_size": "Normal",
            "sum_v_aor": "Mild AR",
            "sum_haemo": ["RV Pressure Overload", "Normal"],
        }));
        assert!(doc.contains_text("Normal"));
        assert!(!doc.contains_text("Normal / "));
        assert!(doc.contains_text("Aortic: Mild AR"));
        assert!(!doc.contains_text("Mitral:"));
        assert!(doc.contains_text("Normal, RV Pressure Overload"));
        assert!(!doc.contains_text("RV Size/Function:"));
    }

    #[test]
    fn segments_follow_the_trigger() {
        let segment_values = json!({
            "rwma_seg_1": "Hypokinetic",
            "rwma_seg_3": "Akinetic",
            "rwma_seg_5": "Dyskinetic",
            "rwma_seg_7": "Normal",
        });

        let off = assemble(segment_values.clone());
        assert!(!off.contains_text("\u{2022}"));

        let mut on = segment_values;
        on["psax_rwma_present"] = json!("Yes");
        let doc = assemble(on);

        let bullets: Vec<_> = text_positions(&doc)
            .into_iter()
            .filter(|(_, _, _, t)| t.starts_with('\u{2022}'))
            .collect();
        assert_eq!(bullets.len(), 3);
        assert_eq!(bullets[0].2, bullets[1].2, "first pair shares a row");
        assert!(bullets[2].2 > bullets[1].2, "third bullet starts a new row");
        assert!(bullets[0].1 < bullets[1].1);
        assert_eq!(bullets[0].1, bullets[2].1);
        assert!(doc.contains_text("RWMA:"));
    }

    #[test]
    fn long_comments_paginate_within_limits() {
        let config = ReportConfig::default();
        let comments = "Dilated RV with flattened septum and reduced longitudinal function. ".repeat(120);
        let fields = FieldSet::from_json(&json!({
            "operator": "Dr Example",
            "general_comments": comments,
        }))
        .expect("valid field set");
        let doc = ReportAssembler::new(&config).assemble(&fields);

        assert!(doc.page_count() >= 2);
        for (_, _, y, _) in text_positions(&doc) {
            assert!(y >= config.layout.margin_top);
            assert!(y <= config.page_limit());
        }
    }

    #[test]
    fn smaller_paper_breaks_above_its_own_edge() {
        let config = ReportConfig {
            paper_size: PaperSize::A5,
            ..ReportConfig::default()
        };
        let fields = FieldSet::from_json(&json!({
            "general_comments": "RV free wall hypokinetic with septal flattening. ".repeat(80),
        }))
        .expect("valid field set");
        let doc = ReportAssembler::new(&config).assemble(&fields);

        let (_, height) = doc.dimensions_mm();
        assert_eq!(height, 210.0);
        assert!(doc.page_count() >= 2);
        for (_, _, y, _) in text_positions(&doc) {
            assert!(y <= config.page_limit(), "baseline {y} below {}", config.page_limit());
        }
    }

    #[test]
    fn examination_closes_with_a_wider_gap() {
        let doc = assemble(json!({ "plax_rvsp": "40", "sub_ivc_v": "<50%" }));
        let runs = text_positions(&doc);
        let baseline = |needle: &str| {
            runs.iter()
                .find(|(_, _, _, t)| t == needle)
                .map(|(_, _, y, _)| *y)
                .unwrap_or_else(|| panic!("{needle} not rendered"))
        };

        let plax_row = baseline("RVSP:");
        let psax_title = baseline("Parasternal Short-Axis View (AV & Mid-Pap)");
        assert_eq!(psax_title - plax_row, 8.0);

        let ivc_row = baseline("IVC Variation:");
        let summary_banner_top = baseline("SUMMARY FINDINGS") - 6.0;
        assert_eq!(summary_banner_top - ivc_row, 10.0);
    }

    #[test]
    fn join_present_variants() {
        assert_eq!(join_present([None, None], " / "), None);
        assert_eq!(
            join_present([Some("a".into()), None, Some("c".into())], " / ").as_deref(),
            Some("a / c")
        );
    }
}
