/// A struct representing some properties to control the [`diff_pretty_html`] generation.
///
/// The `insert_tag` and `delete_tag` represent the `html` tag wrapping the inserted or deleted
/// characters inside a change block. E.g. if `insert_tag` is set to `mark`, inserted text is
/// rendered as `<mark>text</mark>`. They default to `ins` and `del`.
///
/// The `*_class` properties, if set, are added as `class="your css class"`:
/// - `table_class` on the `<table>`, defaults to `diff`
/// - `change_class` on the `<tr>` of change blocks, defaults to `change`
/// - `line_number_class` on the line number cells, defaults to `ln`
/// - `blank_class` on the content cell opposite an unpaired line, defaults to `blank`
/// - `insert_class`, `delete_class` and `equality_class` on content cells by line kind, default to `None`
///
/// `insert_style`, `delete_style` and `equality_style` would add a css style property to content cells.
/// E.g. with `insert_style: Some("background: #e6ffe6")` an inserted line renders as
/// `<td style="background: #e6ffe6">inserted line</td>`
///
/// [`diff_pretty_html`]: crate::TextDiff::diff_pretty_html
pub struct HtmlConfig<'a> {
    insert_tag: &'a str,
    delete_tag: &'a str,
    table_class: Option<&'a str>,
    change_class: Option<&'a str>,
    line_number_class: Option<&'a str>,
    blank_class: Option<&'a str>,
    insert_class: Option<&'a str>,
    delete_class: Option<&'a str>,
    equality_class: Option<&'a str>,
    insert_style: Option<&'a str>,
    delete_style: Option<&'a str>,
    equality_style: Option<&'a str>,
}

impl<'a> Default for HtmlConfig<'a> {
    fn default() -> Self {
        Self {
            insert_tag: "ins",
            delete_tag: "del",
            table_class: Some("diff"),
            change_class: Some("change"),
            line_number_class: Some("ln"),
            blank_class: Some("blank"),
            insert_class: None,
            delete_class: None,
            equality_class: None,
            insert_style: None,
            delete_style: None,
            equality_style: None,
        }
    }
}

impl<'a> HtmlConfig<'a> {
    /// Creates a new instance of the struct with the defaults listed on [`HtmlConfig`]
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn insert_tag(&self) -> &str {
        self.insert_tag
    }

    /// Set the HTML tag wrapping inserted characters
    pub fn set_insert_tag(&mut self, tag: &'a str) {
        self.insert_tag = tag;
    }

    pub(crate) fn delete_tag(&self) -> &str {
        self.delete_tag
    }

    /// Set the HTML tag wrapping deleted characters
    pub fn set_delete_tag(&mut self, tag: &'a str) {
        self.delete_tag = tag;
    }

    pub(crate) fn table_class(&self) -> Option<&'a str> {
        self.table_class
    }

    pub fn set_table_class(&mut self, class: Option<&'a str>) {
        self.table_class = class;
    }

    pub(crate) fn change_class(&self) -> Option<&'a str> {
        self.change_class
    }

    /// Set the css class of change block rows
    pub fn set_change_class(&mut self, class: Option<&'a str>) {
        self.change_class = class;
    }

    pub(crate) fn line_number_class(&self) -> Option<&'a str> {
        self.line_number_class
    }

    pub fn set_line_number_class(&mut self, class: Option<&'a str>) {
        self.line_number_class = class;
    }

    pub(crate) fn blank_class(&self) -> Option<&'a str> {
        self.blank_class
    }

    /// Set the css class of the empty cell opposite an added or removed line
    pub fn set_blank_class(&mut self, class: Option<&'a str>) {
        self.blank_class = class;
    }

    pub(crate) fn insert_class(&self) -> Option<&'a str> {
        self.insert_class
    }

    /// Set the css class for inserted lines
    pub fn set_insert_class(&mut self, class: Option<&'a str>) {
        self.insert_class = class;
    }

    pub(crate) fn delete_class(&self) -> Option<&'a str> {
        self.delete_class
    }

    /// Set the css class for deleted lines
    pub fn set_delete_class(&mut self, class: Option<&'a str>) {
        self.delete_class = class;
    }

    pub(crate) fn equality_class(&self) -> Option<&'a str> {
        self.equality_class
    }

    /// Set the css class for lines that have not changed
    pub fn set_equality_class(&mut self, class: Option<&'a str>) {
        self.equality_class = class;
    }

    pub(crate) fn insert_style(&self) -> Option<&'a str> {
        self.insert_style
    }

    /// Set the css style property for inserted lines
    pub fn set_insert_style(&mut self, style: Option<&'a str>) {
        self.insert_style = style;
    }

    pub(crate) fn delete_style(&self) -> Option<&'a str> {
        self.delete_style
    }

    /// Set the css style property for deleted lines
    pub fn set_delete_style(&mut self, style: Option<&'a str>) {
        self.delete_style = style;
    }

    pub(crate) fn equality_style(&self) -> Option<&'a str> {
        self.equality_style
    }

    /// Set the css style for lines that have not changed
    pub fn set_equality_style(&mut self, style: Option<&'a str>) {
        self.equality_style = style;
    }
}
