use pdf_writer::{Content, Name, Pdf, Rect, Ref, Str};
use std::fs::File;
use std::io::Write;
use std::path::Path;

const FONT_REGULAR: Name<'static> = Name(b"F1");
const FONT_BOLD: Name<'static> = Name(b"F2");

/// Flowing A4 document: headings, paragraphs and paginated tables are
/// appended one after the other, opening new pages as needed.
pub struct PdfManager {
    pdf: Pdf,
    catalog_id: Ref,
    pages_id: Ref,
    font_id: Ref,
    bold_font_id: Ref,
    page_refs: Vec<Ref>,

    content: Content,
    current_content_id: Option<Ref>,
    title: String,
    y: f32,

    page_w: f32,
    page_h: f32,
    margin: f32,
    row_h: f32,

    next_id: i32,

    font_size: f32,
    header_font_size: f32,
    section_font_size: f32,
    title_font_size: f32,
}

impl PdfManager {
    pub fn new(title: &str) -> Self {
        let mut pdf = Pdf::new();

        // ids are assigned by hand
        let catalog_id = Ref::new(1);
        let pages_id = Ref::new(2);
        let font_id = Ref::new(3);
        let bold_font_id = Ref::new(4);

        pdf.type1_font(font_id).base_font(Name(b"Helvetica"));
        pdf.type1_font(bold_font_id)
            .base_font(Name(b"Helvetica-Bold"));

        let mut manager = Self {
            pdf,
            catalog_id,
            pages_id,
            font_id,
            bold_font_id,
            page_refs: Vec::new(),

            content: Content::new(),
            current_content_id: None,
            title: title.to_string(),
            y: 0.0,

            page_w: 595.0,
            page_h: 842.0,
            margin: 50.0,
            row_h: 20.0,

            next_id: 5,

            font_size: 10.0,
            header_font_size: 11.0,
            section_font_size: 13.0,
            title_font_size: 16.0,
        };

        manager.open_page();
        manager
    }

    fn fresh_ref(&mut self) -> Ref {
        let id = self.next_id;
        self.next_id += 1;
        Ref::new(id)
    }

    /// Write the stream of the page being drawn, if any.
    fn close_page(&mut self) {
        if let Some(id) = self.current_content_id.take() {
            let content = std::mem::replace(&mut self.content, Content::new());
            self.pdf.stream(id, &content.finish());
        }
    }

    fn open_page(&mut self) {
        self.close_page();

        let page_id = self.fresh_ref();
        let content_id = self.fresh_ref();
        self.page_refs.push(page_id);

        {
            let mut page = self.pdf.page(page_id);
            page.parent(self.pages_id)
                .media_box(Rect::new(0.0, 0.0, self.page_w, self.page_h))
                .contents(content_id);
            page.resources()
                .fonts()
                .pair(FONT_REGULAR, self.font_id)
                .pair(FONT_BOLD, self.bold_font_id);
        }

        self.current_content_id = Some(content_id);
        let page_no = self.page_refs.len();

        // title on top, page number at the bottom
        let title = self.title.clone();
        Self::draw_text(
            &mut self.content,
            FONT_BOLD,
            self.margin,
            self.page_h - self.margin + 15.0,
            self.title_font_size,
            &title,
        );
        Self::draw_text(
            &mut self.content,
            FONT_REGULAR,
            self.page_w - self.margin - 60.0,
            self.margin - 35.0,
            self.font_size,
            &format!("Page {}", page_no),
        );

        self.y = self.page_h - self.margin - 20.0;
    }

    /// Start a new page when fewer than `needed` points are left.
    fn ensure_space(&mut self, needed: f32) {
        if self.y - needed < self.margin {
            self.open_page();
        }
    }

    fn draw_text(content: &mut Content, font: Name, x: f32, y: f32, size: f32, text: &str) {
        content.begin_text();
        content.set_font(font, size);
        content.set_text_matrix([1.0, 0.0, 0.0, 1.0, x, y]);
        content.show(Str(text.as_bytes()));
        content.end_text();
    }

    fn draw_cell_borders(content: &mut Content, x: f32, y: f32, w: f32, h: f32) {
        content.save_state();
        content.set_stroke_rgb(0.65, 0.65, 0.65);
        content.rect(x, y, w, h);
        content.stroke();
        content.restore_state();
    }

    fn fill_band(content: &mut Content, x: f32, y: f32, w: f32, h: f32, grey: f32) {
        content.save_state();
        content.set_fill_rgb(grey, grey, grey + 0.03);
        content.rect(x, y, w, h);
        content.fill_nonzero();
        content.restore_state();
    }

    /// Cut `text` so it fits a cell of width `w` (Helvetica ~0.5em per char).
    fn fit(text: &str, w: f32, size: f32) -> String {
        let max_chars = ((w - 8.0) / (size * 0.5)).max(1.0) as usize;
        if text.chars().count() <= max_chars {
            text.to_string()
        } else {
            let mut s: String = text.chars().take(max_chars.saturating_sub(3)).collect();
            s.push_str("...");
            s
        }
    }

    fn draw_row(&mut self, col_widths: &[f32], row: &[String], font: Name, size: f32) {
        let mut x = self.margin;
        for (i, w) in col_widths.iter().enumerate() {
            let text = row.get(i).map(String::as_str).unwrap_or("");
            Self::draw_text(
                &mut self.content,
                font,
                x + 4.0,
                self.y + 6.0,
                size,
                &Self::fit(text, *w, size),
            );
            Self::draw_cell_borders(&mut self.content, x, self.y, *w, self.row_h);
            x += w;
        }
    }

    /// Column widths from header + content, scaled down to the page width.
    fn compute_col_widths(&self, headers: &[&str], rows: &[Vec<String>]) -> Vec<f32> {
        let mut widths: Vec<f32> = headers.iter().map(|h| h.len() as f32 * 6.5 + 8.0).collect();

        for row in rows {
            for (i, cell) in row.iter().enumerate().take(widths.len()) {
                widths[i] = (cell.chars().count() as f32 * 5.6 + 8.0).max(widths[i]);
            }
        }

        let total: f32 = widths.iter().sum();
        let max = self.page_w - 2.0 * self.margin;

        if total > max {
            let scale = max / total;
            for w in &mut widths {
                *w *= scale;
            }
        }

        widths
    }

    pub fn heading(&mut self, text: &str) {
        self.ensure_space(self.row_h * 3.0);
        self.y -= 24.0;
        Self::draw_text(
            &mut self.content,
            FONT_BOLD,
            self.margin,
            self.y,
            self.section_font_size,
            text,
        );
        self.y -= 8.0;
    }

    pub fn paragraph(&mut self, text: &str) {
        self.ensure_space(self.row_h);
        self.y -= self.row_h;
        Self::draw_text(
            &mut self.content,
            FONT_REGULAR,
            self.margin,
            self.y + 6.0,
            self.font_size,
            text,
        );
    }

    /// Table with a shaded header row, repeated on every page it spans.
    pub fn table(&mut self, headers: &[&str], rows: &[Vec<String>]) {
        let col_widths = self.compute_col_widths(headers, rows);
        let table_w: f32 = col_widths.iter().sum();
        let header_row: Vec<String> = headers.iter().map(|s| s.to_string()).collect();

        self.ensure_space(self.row_h * 2.0);
        self.table_header(&col_widths, table_w, &header_row);

        for (i, row) in rows.iter().enumerate() {
            if self.y - self.row_h < self.margin {
                self.open_page();
                self.table_header(&col_widths, table_w, &header_row);
            }

            self.y -= self.row_h;

            // zebra stripe
            if i % 2 == 0 {
                Self::fill_band(&mut self.content, self.margin, self.y, table_w, self.row_h, 0.96);
            }

            self.draw_row(&col_widths, row, FONT_REGULAR, self.font_size);
        }
    }

    fn table_header(&mut self, col_widths: &[f32], table_w: f32, header_row: &[String]) {
        self.y -= self.row_h;
        Self::fill_band(&mut self.content, self.margin, self.y, table_w, self.row_h, 0.85);
        self.draw_row(col_widths, header_row, FONT_BOLD, self.header_font_size);
    }

    pub fn save(mut self, path: &Path) -> std::io::Result<()> {
        self.close_page();

        // Catalog + Pages tree, built once at the end
        self.pdf.catalog(self.catalog_id).pages(self.pages_id);
        {
            let mut pages = self.pdf.pages(self.pages_id);
            pages.count(self.page_refs.len() as i32);
            pages.kids(self.page_refs.iter().copied());
        }

        let bytes = self.pdf.finish();
        let mut f = File::create(path)?;
        f.write_all(&bytes)?;
        Ok(())
    }
}
