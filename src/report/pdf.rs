use std::io::BufWriter;

use printpdf::*;

use super::{ConsultationReport, ReportError};

/// Generates an A4 PDF from the consultation report. Returns PDF bytes.
pub fn generate_report_pdf(report: &ConsultationReport) -> Result<Vec<u8>, ReportError> {
    let (doc, page1, layer1) = PdfDocument::new(&report.title, Mm(210.0), Mm(297.0), "Layer 1");
    let layer = doc.get_page(page1).get_layer(layer1);
    let font = doc
        .add_builtin_font(BuiltinFont::Helvetica)
        .map_err(|e| ReportError::Pdf(format!("font error: {e}")))?;
    let bold = doc
        .add_builtin_font(BuiltinFont::HelveticaBold)
        .map_err(|e| ReportError::Pdf(format!("font error: {e}")))?;

    let mut y = Mm(280.0);

    // Title + header
    layer.use_text(&report.title, 14.0, Mm(20.0), y, &bold);
    y -= Mm(6.0);
    layer.use_text(
        format!("Generated: {}", report.generated_at),
        9.0,
        Mm(20.0),
        y,
        &font,
    );
    y -= Mm(4.5);
    layer.use_text(
        format!("Urgency: {}   Suggested specialty: {}", report.urgency, report.specialty),
        9.0,
        Mm(20.0),
        y,
        &font,
    );
    y -= Mm(8.0);

    // Detected symptom tags
    if !report.detected_symptoms.is_empty() {
        layer.use_text("REPORTED SYMPTOMS:", 11.0, Mm(20.0), y, &bold);
        y -= Mm(6.0);
        let text = format!("  {}", report.detected_symptoms.join(", "));
        for line in wrap_text(&text, 80) {
            layer.use_text(&line, 9.0, Mm(25.0), y, &font);
            y -= Mm(4.5);
        }
        y -= Mm(4.0);
    }

    // Collected answers
    layer.use_text("CONSULTATION DETAILS:", 11.0, Mm(20.0), y, &bold);
    y -= Mm(6.0);
    for field in &report.fields {
        let text = format!("  {}: {}", field.label, field.value);
        for line in wrap_text(&text, 80) {
            layer.use_text(&line, 9.0, Mm(25.0), y, &font);
            y -= Mm(4.5);
        }
        y -= Mm(1.5);
    }

    // Disclaimer
    y -= Mm(6.0);
    for line in wrap_text(&report.disclaimer, 90) {
        layer.use_text(&line, 8.0, Mm(20.0), y, &font);
        y -= Mm(4.0);
    }

    let mut buf = BufWriter::new(Vec::new());
    doc.save(&mut buf)
        .map_err(|e| ReportError::Pdf(format!("save error: {e}")))?;
    buf.into_inner()
        .map_err(|e| ReportError::Pdf(format!("buffer error: {e}")))
}

fn wrap_text(text: &str, max_chars: usize) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current = String::new();

    for word in text.split_whitespace() {
        if current.len() + word.len() + 1 > max_chars && !current.is_empty() {
            lines.push(current.clone());
            current.clear();
        }
        if !current.is_empty() {
            current.push(' ');
        }
        current.push_str(word);
    }
    if !current.is_empty() {
        lines.push(current);
    }
    lines
}

#[cfg(test)]
mod tests {
    use uuid::Uuid;

    use super::*;
    use crate::models::Session;

    #[test]
    fn wrap_text_respects_the_limit() {
        let lines = wrap_text("one two three four five six seven eight", 15);
        assert!(lines.len() > 1);
        assert!(lines.iter().all(|l| l.len() <= 15));
    }

    #[test]
    fn wrap_text_empty_input_yields_no_lines() {
        assert!(wrap_text("", 80).is_empty());
        assert!(wrap_text("   ", 80).is_empty());
    }

    #[test]
    fn pdf_bytes_start_with_the_pdf_header() {
        let mut session = Session::new(Uuid::new_v4());
        session.main_symptom = Some("a dull headache".into());
        session
            .collected_answers
            .insert("duration".into(), "3 days".into());

        let report = ConsultationReport::from_session(&session);
        let bytes = generate_report_pdf(&report).unwrap();
        assert!(!bytes.is_empty());
        assert_eq!(&bytes[..4], b"%PDF");
    }
}
