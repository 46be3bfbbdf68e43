pub const ADD_CONTACT: &str = "addcontact requires a name and at least one 10-digit phone number, \
     optionally followed by more phones, one email and an address, \
     e.g. 'addcontact Ivan Petrov 0987654321 ivan@example.com vul. Parkova 12, Kyiv'";
pub const EDIT_NAME: &str = "editname requires the old and the new name, e.g. 'editname Ivan Petro'";
pub const REMOVE_CONTACT: &str = "removecontact requires a name, e.g. 'removecontact Ivan'";
pub const ADD_PHONE: &str =
    "addphone requires a name and a phone number, e.g. 'addphone Ivan 0661234567'";
pub const CHANGE_PHONE: &str = "changephone requires a name, the old number and the new number, \
     e.g. 'changephone Ivan 0661234567 0961234567'";
pub const REMOVE_PHONE: &str =
    "removephone requires a name and the number to remove, e.g. 'removephone Ivan 0661234567'";
pub const SHOW_PHONE: &str = "showphone requires a name, e.g. 'showphone Ivan'";
pub const ADD_BIRTHDAY: &str =
    "addbday requires a name and a date (DD.MM.YYYY), e.g. 'addbday Ivan 15.05.1990'";
pub const SHOW_BIRTHDAY: &str = "showbday requires a name, e.g. 'showbday Ivan'";
pub const EDIT_BIRTHDAY: &str =
    "editbday requires a name and a new date (DD.MM.YYYY), e.g. 'editbday Ivan 16.05.1990'";
pub const REMOVE_BIRTHDAY: &str = "removebday requires a name, e.g. 'removebday Ivan'";
pub const UPCOMING_BIRTHDAYS: &str =
    "upcomingbdays takes at most one argument, the number of days ahead, e.g. 'upcomingbdays 14'";
pub const SEARCH: &str = "search requires a query such as a name, phone, birthday, email or address, \
     e.g. 'search Ivan' or 'search 15.05.1990'";
pub const ADD_EMAIL: &str =
    "addemail requires a name and an email, e.g. 'addemail Ivan ivan@example.com'";
pub const EDIT_EMAIL: &str =
    "editemail requires a name and a new email, e.g. 'editemail Ivan new@example.com'";
pub const REMOVE_EMAIL: &str = "removeemail requires a name, e.g. 'removeemail Ivan'";
pub const ADD_ADDRESS: &str =
    "addaddress requires a name and an address, e.g. 'addaddress Ivan vul. Vilna 1, Kyiv'";
pub const EDIT_ADDRESS: &str =
    "editaddress requires a name and a new address, e.g. 'editaddress Ivan vul. Nova 2, Kyiv'";
pub const REMOVE_ADDRESS: &str = "removeaddress requires a name, e.g. 'removeaddress Ivan'";
pub const ADD_NOTE: &str = "addnote requires a name and the note text, optionally with #tags, \
     e.g. 'addnote Ivan Meeting at 3 PM #urgent'";
pub const EDIT_NOTE: &str = "editnote requires a name, the old note text and the new note text, \
     e.g. 'editnote Ivan Meeting at 3 PM Meeting moved to 4 PM #urgent'";
pub const REMOVE_NOTE: &str = "removenote requires a name and optionally the note text; \
     without text every note of the contact is removed";
pub const SEARCH_NOTE: &str = "searchnote requires a keyword, e.g. 'searchnote meeting'";
pub const ADD_TAG: &str = "addtag requires a name, the note text and the tag, \
     e.g. 'addtag Ivan Project planning #meeting'";
pub const REMOVE_TAG: &str = "removetag requires a name, the note text and optionally a tag; \
     without a tag every tag of the note is removed";
pub const SEARCH_TAG: &str = "searchtag requires a tag, e.g. 'searchtag #urgent'";
