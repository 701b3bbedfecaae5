//! Field and template-parameter tables of every form.

use crate::fields::{Choice, FieldSpec, InputKind, Rule};
use crate::payload::{ParamSpec, Source};
use crate::validate::UploadPolicy;

const fn choice(value: &'static str, label: &'static str) -> Choice {
    Choice { value, label }
}

pub const GENDERS: &[Choice] = &[
    choice("male", "Male"),
    choice("female", "Female"),
    choice("other", "Other"),
];

pub const MARITAL_STATUSES: &[Choice] = &[
    choice("single", "Single"),
    choice("married", "Married"),
    choice("divorced", "Divorced"),
    choice("widowed", "Widowed"),
];

pub const HOME_COUNTRIES: &[Choice] = &[
    choice("sri-lanka", "Sri Lanka"),
    choice("india", "India"),
    choice("pakistan", "Pakistan"),
    choice("bangladesh", "Bangladesh"),
    choice("nepal", "Nepal"),
    choice("maldives", "Maldives"),
    choice("other", "Other"),
];

pub const DESTINATIONS: &[Choice] = &[
    choice("australia", "Australia"),
    choice("canada", "Canada"),
    choice("new-zealand", "New Zealand"),
    choice("uk", "United Kingdom"),
    choice("usa", "United States"),
    choice("germany", "Germany"),
    choice("japan", "Japan"),
    choice("other", "Other"),
];

pub const EDUCATION_LEVELS: &[Choice] = &[
    choice("high-school", "High School"),
    choice("diploma", "Diploma"),
    choice("bachelors", "Bachelor's Degree"),
    choice("masters", "Master's Degree"),
    choice("phd", "PhD"),
];

pub const STUDY_FIELDS: &[Choice] = &[
    choice("it", "Information Technology"),
    choice("business", "Business & Management"),
    choice("engineering", "Engineering"),
    choice("health", "Health & Medicine"),
    choice("arts", "Arts & Humanities"),
    choice("science", "Science"),
    choice("other", "Other"),
];

pub const RESIDENCY_STATUSES: &[Choice] = &[
    choice("citizen", "Citizen"),
    choice("permanent-resident", "Permanent Resident"),
    choice("temporary-visa", "Temporary Visa"),
    choice("other", "Other"),
];

pub const URGENCY_LEVELS: &[Choice] = &[
    choice("immediate", "Immediate (within 3 months)"),
    choice("soon", "Soon (3-6 months)"),
    choice("planning", "Planning (6-12 months)"),
    choice("exploring", "Just exploring"),
];

pub const WORK_EXPERIENCE: &[Choice] = &[
    choice("0-1", "Less than 1 year"),
    choice("1-3", "1-3 years"),
    choice("3-5", "3-5 years"),
    choice("5-10", "5-10 years"),
    choice("10+", "More than 10 years"),
];

pub const ENGLISH_TESTS: &[Choice] = &[
    choice("ielts", "IELTS"),
    choice("pte", "PTE"),
    choice("toefl", "TOEFL"),
    choice("oet", "OET"),
];

pub const JOB_INTERESTS: &[Choice] = &[
    choice("construction", "Construction"),
    choice("hospitality", "Hospitality"),
    choice("agriculture", "Agriculture"),
    choice("manufacturing", "Manufacturing"),
    choice("caregiving", "Caregiving"),
    choice("cleaning", "Cleaning"),
    choice("driving", "Driving & Logistics"),
    choice("other", "Other"),
];

pub const LANGUAGE_LEVELS: &[Choice] = &[
    choice("beginner", "Beginner"),
    choice("intermediate", "Intermediate"),
    choice("advanced", "Advanced"),
    choice("fluent", "Fluent"),
];

pub const SUPPORT_SERVICES: &[Choice] = &[
    choice("ielts", "IELTS Preparation"),
    choice("pte", "PTE Preparation"),
    choice("spoken-english", "Spoken English"),
    choice("interview", "Interview Preparation"),
    choice("other", "Other"),
];

pub const VISA_TYPES: &[Choice] = &[
    choice("student", "Student Visa"),
    choice("work", "Work Visa"),
    choice("visitor", "Visitor Visa"),
    choice("family", "Family / Partner Visa"),
    choice("pr", "Permanent Residency"),
    choice("other", "Other"),
];

pub const CONTACT_SERVICES: &[Choice] = &[
    choice("student", "Student Migration"),
    choice("parent", "Parent Migration"),
    choice("skilled", "Skilled Migration"),
    choice("unskilled", "Unskilled Migration"),
    choice("support", "Language Support"),
    choice("other", "Other Services"),
];

const NOT_PROVIDED: &str = "Not provided";
const AGREE_MESSAGE: &str = "Please agree to the Terms and Conditions";
const CV_UPLOADED: &str = "Yes - CV uploaded";
const NO_CV: &str = "No file uploaded";

// Personal details shared by the migration forms.
const FIRST_NAME: FieldSpec = FieldSpec::new(
    "firstName",
    "First Name",
    InputKind::Text,
    Rule::Required("Please enter your first name"),
);
const MIDDLE_NAME: FieldSpec =
    FieldSpec::new("middleName", "Middle Name", InputKind::Text, Rule::Optional);
const LAST_NAME: FieldSpec = FieldSpec::new(
    "lastName",
    "Last Name",
    InputKind::Text,
    Rule::Required("Please enter your last name"),
);
const SEX: FieldSpec = FieldSpec::new(
    "sex",
    "Gender",
    InputKind::Choice(GENDERS),
    Rule::Required("Please select your gender"),
);
const DOB: FieldSpec = FieldSpec::new(
    "dob",
    "Date of Birth",
    InputKind::Date,
    Rule::Required("Please enter your date of birth"),
);
const MARITAL_STATUS: FieldSpec = FieldSpec::new(
    "maritalStatus",
    "Marital Status",
    InputKind::Choice(MARITAL_STATUSES),
    Rule::Required("Please select your marital status"),
);
const EMAIL: FieldSpec = FieldSpec::new(
    "email",
    "Email Address",
    InputKind::Email,
    Rule::Required("Please enter your email address"),
);
const PHONE: FieldSpec = FieldSpec::new(
    "phone",
    "Phone Number",
    InputKind::Phone,
    Rule::Required("Please enter your phone number"),
);
const CURRENT_COUNTRY: FieldSpec = FieldSpec::new(
    "currentCountry",
    "Current Country",
    InputKind::Choice(HOME_COUNTRIES),
    Rule::Required("Please select your current country"),
);
const ADDITIONAL_INFO: FieldSpec = FieldSpec::new(
    "additionalInfo",
    "Additional Information",
    InputKind::TextArea,
    Rule::Optional,
);
const AGREE: FieldSpec = FieldSpec::new(
    "agree",
    "I agree to the Terms and Conditions",
    InputKind::Checkbox,
    Rule::Required(AGREE_MESSAGE),
);
const NEWSLETTER: FieldSpec = FieldSpec::new(
    "newsletter",
    "Keep me updated with news and offers",
    InputKind::Checkbox,
    Rule::Optional,
);

const FULL_NAME: Source = Source::FullName {
    first: "firstName",
    middle: "middleName",
    last: "lastName",
};

pub static CONTACT_FIELDS: &[FieldSpec] = &[
    FieldSpec::new(
        "name",
        "Full Name",
        InputKind::Text,
        Rule::Required("Please enter your name"),
    ),
    EMAIL,
    FieldSpec::new("phone", "Phone Number", InputKind::Phone, Rule::Optional),
    FieldSpec::new(
        "service",
        "Service Interested In",
        InputKind::Choice(CONTACT_SERVICES),
        Rule::Optional,
    ),
    FieldSpec::new(
        "message",
        "Your Message",
        InputKind::TextArea,
        Rule::Required("Please enter your message"),
    ),
];

pub static CONTACT_PARAMS: &[ParamSpec] = &[
    ParamSpec::new("contactName", Source::Field("name")).labelled("Name"),
    ParamSpec::new("contactEmail", Source::Email("email")).labelled("Email"),
    ParamSpec::new("contactPhone", Source::Field("phone"))
        .labelled("Phone")
        .or(NOT_PROVIDED),
    ParamSpec::new("contactService", Source::Field("service")).or("Not selected"),
    ParamSpec::row("Service Interested In", Source::Choice("service")).or("Not selected"),
    ParamSpec::new("contactMessage", Source::Field("message")).labelled("Message"),
    ParamSpec::new("name", Source::Field("name")),
    ParamSpec::new("email", Source::Field("email")),
    ParamSpec::new("phone", Source::Field("phone")).or(NOT_PROVIDED),
];

pub static STUDENT_FIELDS: &[FieldSpec] = &[
    FIRST_NAME,
    MIDDLE_NAME,
    LAST_NAME,
    SEX,
    DOB,
    MARITAL_STATUS,
    EMAIL,
    PHONE,
    CURRENT_COUNTRY,
    FieldSpec::new(
        "educationLevel",
        "Highest Education Level",
        InputKind::Choice(EDUCATION_LEVELS),
        Rule::Required("Please select your education level"),
    ),
    FieldSpec::new(
        "desiredCountry",
        "Desired Study Destination",
        InputKind::Choice(DESTINATIONS),
        Rule::Required("Please select your desired study destination"),
    ),
    FieldSpec::new(
        "studyField",
        "Field of Study",
        InputKind::Choice(STUDY_FIELDS),
        Rule::Required("Please select your field of study"),
    ),
    FieldSpec::new(
        "academicGoals",
        "Academic Goals",
        InputKind::TextArea,
        Rule::Optional,
    ),
    ADDITIONAL_INFO,
    FieldSpec::new(
        "cvUpload",
        "Upload your CV",
        InputKind::Upload(UploadPolicy::cv(true)),
        Rule::Optional,
    ),
    AGREE,
    NEWSLETTER,
];

pub static STUDENT_PARAMS: &[ParamSpec] = &[
    ParamSpec::new("studentName", FULL_NAME).labelled("Name"),
    ParamSpec::new("studentEmail", Source::Email("email")).labelled("Email"),
    ParamSpec::new("studentPhone", Source::Field("phone")).labelled("Phone"),
    ParamSpec::new("studentSex", Source::Field("sex")).labelled("Gender"),
    ParamSpec::new("studentDOB", Source::Field("dob")).labelled("Date of Birth"),
    ParamSpec::new("studentMaritalStatus", Source::Field("maritalStatus"))
        .labelled("Marital Status"),
    ParamSpec::new("studentCurrentCountry", Source::Field("currentCountry"))
        .labelled("Current Country"),
    ParamSpec::new("studentEducationLevel", Source::Field("educationLevel"))
        .labelled("Education Level"),
    ParamSpec::new("studentDesiredCountry", Source::Field("desiredCountry"))
        .labelled("Desired Country"),
    ParamSpec::new("studentStudyField", Source::Field("studyField")).labelled("Field of Study"),
    ParamSpec::new("studentAcademicGoals", Source::Field("academicGoals"))
        .labelled("Academic Goals")
        .or(NOT_PROVIDED),
    ParamSpec::new("studentAdditionalInfo", Source::Field("additionalInfo"))
        .labelled("Additional Info")
        .or(NOT_PROVIDED),
    ParamSpec::new(
        "studentFileUpload",
        Source::Attached {
            field: "cvUpload",
            yes: CV_UPLOADED,
            no: NO_CV,
        },
    )
    .labelled("CV Upload"),
    ParamSpec::new("studentNewsletter", Source::YesNo("newsletter")).labelled("Newsletter"),
];

pub static PARENT_FIELDS: &[FieldSpec] = &[
    FIRST_NAME,
    MIDDLE_NAME,
    LAST_NAME,
    EMAIL,
    PHONE,
    SEX,
    DOB,
    MARITAL_STATUS,
    CURRENT_COUNTRY,
    FieldSpec::new(
        "residencyStatus",
        "Your Residency Status",
        InputKind::Choice(RESIDENCY_STATUSES),
        Rule::Required("Please select your residency status"),
    ),
    FieldSpec::new(
        "parentsLocation",
        "Parents' Current Location",
        InputKind::Text,
        Rule::Required("Please enter your parents' current location"),
    ),
    FieldSpec::new(
        "urgency",
        "Urgency",
        InputKind::Choice(URGENCY_LEVELS),
        Rule::Required("Please select the urgency level"),
    ),
    FieldSpec::new(
        "familyDetails",
        "Family Details",
        InputKind::TextArea,
        Rule::Optional,
    ),
    ADDITIONAL_INFO,
    AGREE,
    NEWSLETTER,
];

pub static PARENT_PARAMS: &[ParamSpec] = &[
    ParamSpec::new("parentName", FULL_NAME).labelled("Name"),
    ParamSpec::new("parentEmail", Source::Email("email")).labelled("Email"),
    ParamSpec::new("parentPhone", Source::Field("phone")).labelled("Phone"),
    ParamSpec::new("parentSex", Source::Field("sex")).labelled("Gender"),
    ParamSpec::new("parentDob", Source::Field("dob")).labelled("Date of Birth"),
    ParamSpec::new("parentMaritalStatus", Source::Field("maritalStatus"))
        .labelled("Marital Status"),
    ParamSpec::new("parentMiddleName", Source::Field("middleName")).or(NOT_PROVIDED),
    ParamSpec::new("parentCurrentCountry", Source::Field("currentCountry"))
        .labelled("Current Country"),
    ParamSpec::new("parentResidencyStatus", Source::Field("residencyStatus"))
        .labelled("Residency Status"),
    ParamSpec::new("parentParentsLocation", Source::Field("parentsLocation"))
        .labelled("Parents Location"),
    ParamSpec::new("parentUrgency", Source::Field("urgency")).labelled("Urgency"),
    ParamSpec::new("parentFamilyDetails", Source::Field("familyDetails"))
        .labelled("Family Details")
        .or(NOT_PROVIDED),
    ParamSpec::new("parentAdditionalInfo", Source::Field("additionalInfo"))
        .labelled("Additional Info")
        .or(NOT_PROVIDED),
    ParamSpec::new("parentNewsletter", Source::YesNo("newsletter")).labelled("Newsletter"),
];

pub static SKILLED_FIELDS: &[FieldSpec] = &[
    FIRST_NAME,
    MIDDLE_NAME,
    LAST_NAME,
    SEX,
    DOB,
    MARITAL_STATUS,
    EMAIL,
    PHONE,
    CURRENT_COUNTRY,
    FieldSpec::new(
        "educationLevel",
        "Highest Education Level",
        InputKind::Choice(EDUCATION_LEVELS),
        Rule::Required("Please select your education level"),
    ),
    FieldSpec::new(
        "occupation",
        "Current Occupation",
        InputKind::Text,
        Rule::Required("Please enter your occupation"),
    ),
    FieldSpec::new(
        "workExperience",
        "Work Experience",
        InputKind::Choice(WORK_EXPERIENCE),
        Rule::Required("Please select your work experience"),
    ),
    FieldSpec::new(
        "desiredCountry",
        "Preferred Destination",
        InputKind::Choice(DESTINATIONS),
        Rule::Required("Please select your preferred destination"),
    ),
    FieldSpec::new(
        "englishTest",
        "English Test Taken",
        InputKind::Choice(ENGLISH_TESTS),
        Rule::Optional,
    ),
    FieldSpec::new(
        "migrationGoals",
        "Migration Goals",
        InputKind::TextArea,
        Rule::Optional,
    ),
    ADDITIONAL_INFO,
    FieldSpec::new(
        "cvUpload",
        "Upload your CV",
        InputKind::Upload(UploadPolicy::cv(true)),
        Rule::Optional,
    ),
    AGREE,
    NEWSLETTER,
];

pub static SKILLED_PARAMS: &[ParamSpec] = &[
    ParamSpec::new("skilledName", FULL_NAME).labelled("Name"),
    ParamSpec::new("skilledEmail", Source::Email("email")).labelled("Email"),
    ParamSpec::new("skilledPhone", Source::Field("phone")).labelled("Phone"),
    ParamSpec::new("skilledSex", Source::Field("sex")).labelled("Gender"),
    ParamSpec::new("skilledDOB", Source::Field("dob")).labelled("Date of Birth"),
    ParamSpec::new("skilledMaritalStatus", Source::Field("maritalStatus"))
        .labelled("Marital Status"),
    ParamSpec::new("skilledCurrentCountry", Source::Field("currentCountry"))
        .labelled("Current Country"),
    ParamSpec::new("skilledEducationLevel", Source::Field("educationLevel"))
        .labelled("Education Level"),
    ParamSpec::new("skilledOccupation", Source::Field("occupation")).labelled("Occupation"),
    ParamSpec::new("skilledWorkExperience", Source::Field("workExperience"))
        .labelled("Work Experience"),
    ParamSpec::new("skilledDesiredCountry", Source::Field("desiredCountry"))
        .labelled("Desired Country"),
    ParamSpec::new("skilledEnglishTest", Source::Field("englishTest"))
        .labelled("English Test")
        .or("Not taken yet"),
    ParamSpec::new("skilledMigrationGoals", Source::Field("migrationGoals"))
        .labelled("Migration Goals")
        .or(NOT_PROVIDED),
    ParamSpec::new("skilledAdditionalInfo", Source::Field("additionalInfo"))
        .labelled("Additional Info")
        .or(NOT_PROVIDED),
    ParamSpec::new(
        "skilledFileUpload",
        Source::Attached {
            field: "cvUpload",
            yes: CV_UPLOADED,
            no: NO_CV,
        },
    )
    .labelled("CV Upload"),
    ParamSpec::new("skilledNewsletter", Source::YesNo("newsletter")).labelled("Newsletter"),
];

pub static UNSKILLED_FIELDS: &[FieldSpec] = &[
    FIRST_NAME,
    MIDDLE_NAME,
    LAST_NAME,
    SEX,
    DOB,
    MARITAL_STATUS,
    EMAIL,
    PHONE,
    CURRENT_COUNTRY,
    FieldSpec::new(
        "age",
        "Age",
        InputKind::Number,
        Rule::Range {
            missing: "Please enter your age",
            min: 18,
            max: 65,
        },
    ),
    FieldSpec::new(
        "desiredCountry",
        "Desired Work Destination",
        InputKind::Choice(DESTINATIONS),
        Rule::Required("Please select your desired work destination"),
    ),
    FieldSpec::new(
        "workExperience",
        "Work Experience",
        InputKind::Choice(WORK_EXPERIENCE),
        Rule::Required("Please select your work experience level"),
    ),
    FieldSpec::new(
        "jobInterest",
        "Job Interest",
        InputKind::Choice(JOB_INTERESTS),
        Rule::Required("Please select your job interest"),
    ),
    FieldSpec::new(
        "languageLevel",
        "English Proficiency",
        InputKind::Choice(LANGUAGE_LEVELS),
        Rule::Required("Please select your English proficiency level"),
    ),
    ADDITIONAL_INFO,
    FieldSpec::new(
        "cvUpload",
        "Upload your CV (optional)",
        InputKind::Upload(UploadPolicy::cv(false)),
        Rule::Optional,
    ),
    AGREE,
    NEWSLETTER,
];

pub static UNSKILLED_PARAMS: &[ParamSpec] = &[
    ParamSpec::new("unskilledName", FULL_NAME).labelled("Name"),
    ParamSpec::new("unskilledMiddleName", Source::Field("middleName")).or(NOT_PROVIDED),
    ParamSpec::new("unskilledEmail", Source::Email("email")).labelled("Email"),
    ParamSpec::new("unskilledPhone", Source::Field("phone")).labelled("Phone"),
    ParamSpec::new("unskilledSex", Source::Field("sex")).labelled("Gender"),
    ParamSpec::new("unskilledDOB", Source::Field("dob")).labelled("Date of Birth"),
    ParamSpec::new("unskilledMaritalStatus", Source::Field("maritalStatus"))
        .labelled("Marital Status"),
    ParamSpec::new("unskilledCurrentCountry", Source::Field("currentCountry"))
        .labelled("Current Country"),
    ParamSpec::new("unskilledAge", Source::Field("age")).labelled("Age"),
    ParamSpec::new("unskilledDesiredCountry", Source::Field("desiredCountry"))
        .labelled("Desired Country"),
    ParamSpec::new("unskilledWorkExperience", Source::Field("workExperience"))
        .labelled("Work Experience"),
    ParamSpec::new("unskilledJobInterest", Source::Field("jobInterest"))
        .labelled("Job Interest"),
    ParamSpec::new("unskilledLanguageLevel", Source::Field("languageLevel"))
        .labelled("Language Level"),
    ParamSpec::new("unskilledAdditionalInfo", Source::Field("additionalInfo"))
        .labelled("Additional Info")
        .or(NOT_PROVIDED),
    ParamSpec::new(
        "unskilledFileUpload",
        Source::Attached {
            field: "cvUpload",
            yes: CV_UPLOADED,
            no: NO_CV,
        },
    )
    .labelled("CV Upload"),
    ParamSpec::new("unskilledNewsletter", Source::YesNo("newsletter")).labelled("Newsletter"),
];

pub static SUPPORT_FIELDS: &[FieldSpec] = &[
    FieldSpec::new(
        "lsFirstName",
        "First Name",
        InputKind::Text,
        Rule::Required("Please enter your first name"),
    ),
    FieldSpec::new("lsMiddleName", "Middle Name", InputKind::Text, Rule::Optional),
    FieldSpec::new(
        "lsLastName",
        "Last Name",
        InputKind::Text,
        Rule::Required("Please enter your last name"),
    ),
    FieldSpec::new(
        "lsEmail",
        "Email Address",
        InputKind::Email,
        Rule::Required("Please enter your email address"),
    ),
    FieldSpec::new(
        "lsPhone",
        "Phone Number",
        InputKind::Phone,
        Rule::Required("Please enter your phone number"),
    ),
    FieldSpec::new(
        "lsSex",
        "Gender",
        InputKind::Choice(GENDERS),
        Rule::Required("Please select your gender"),
    ),
    FieldSpec::new(
        "lsDOB",
        "Date of Birth",
        InputKind::Date,
        Rule::Required("Please enter your date of birth"),
    ),
    FieldSpec::new(
        "lsMaritalStatus",
        "Marital Status",
        InputKind::Choice(MARITAL_STATUSES),
        Rule::Required("Please select your marital status"),
    ),
    FieldSpec::new(
        "lsCountry",
        "Current Country",
        InputKind::Choice(HOME_COUNTRIES),
        Rule::Required("Please select your current country"),
    ),
    FieldSpec::new(
        "lsDestination",
        "Destination Country",
        InputKind::Choice(DESTINATIONS),
        Rule::Required("Please select your destination country"),
    ),
    FieldSpec::new(
        "lsService",
        "Service Needed",
        InputKind::Choice(SUPPORT_SERVICES),
        Rule::Required("Please select the service you need"),
    ),
    FieldSpec::new(
        "lsLevel",
        "Current Language Level",
        InputKind::Choice(LANGUAGE_LEVELS),
        Rule::Optional,
    ),
    FieldSpec::new("lsGoals", "Your Goals", InputKind::TextArea, Rule::Optional),
    FieldSpec::new(
        "lsAdditional",
        "Additional Information",
        InputKind::TextArea,
        Rule::Optional,
    ),
    FieldSpec::new(
        "lsAgree",
        "I agree to the Terms and Conditions",
        InputKind::Checkbox,
        Rule::Required(AGREE_MESSAGE),
    ),
    FieldSpec::new(
        "lsUpdates",
        "Keep me updated with news and offers",
        InputKind::Checkbox,
        Rule::Optional,
    ),
];

pub static SUPPORT_PARAMS: &[ParamSpec] = &[
    ParamSpec::new(
        "supportName",
        Source::FullName {
            first: "lsFirstName",
            middle: "lsMiddleName",
            last: "lsLastName",
        },
    )
    .labelled("Name"),
    ParamSpec::new("supportEmail", Source::Email("lsEmail")).labelled("Email"),
    ParamSpec::new("supportPhone", Source::Field("lsPhone")).labelled("Phone"),
    ParamSpec::new("supportSex", Source::Field("lsSex")).labelled("Gender"),
    ParamSpec::new("supportDOB", Source::Field("lsDOB")).labelled("Date of Birth"),
    ParamSpec::new("supportMaritalStatus", Source::Field("lsMaritalStatus"))
        .labelled("Marital Status"),
    ParamSpec::new("supportCurrentCountry", Source::Field("lsCountry")).labelled("Country"),
    ParamSpec::new("supportDestinationCountry", Source::Field("lsDestination"))
        .labelled("Destination"),
    ParamSpec::new("supportServiceNeeded", Source::Field("lsService")).labelled("Service"),
    ParamSpec::new("supportLanguageLevel", Source::Field("lsLevel"))
        .labelled("Language Level")
        .or("Not specified"),
    ParamSpec::new("supportGoals", Source::Field("lsGoals"))
        .labelled("Goals")
        .or(NOT_PROVIDED),
    ParamSpec::new("supportAdditionalInfo", Source::Field("lsAdditional"))
        .labelled("Additional Info")
        .or(NOT_PROVIDED),
    ParamSpec::new("supportNewsletter", Source::YesNo("lsUpdates")).labelled("Wants Updates"),
];

pub static DOC_FIELDS: &[FieldSpec] = &[
    FieldSpec::new(
        "visaFirstName",
        "First Name",
        InputKind::Text,
        Rule::Required("Please enter your first name"),
    ),
    FieldSpec::new("visaMiddleName", "Middle Name", InputKind::Text, Rule::Optional),
    FieldSpec::new(
        "visaLastName",
        "Last Name",
        InputKind::Text,
        Rule::Required("Please enter your last name"),
    ),
    FieldSpec::new(
        "visaEmail",
        "Email Address",
        InputKind::Email,
        Rule::Required("Please enter your email address"),
    ),
    FieldSpec::new(
        "visaPhone",
        "Phone Number",
        InputKind::Phone,
        Rule::Required("Please enter your phone number"),
    ),
    FieldSpec::new("visaSex", "Gender", InputKind::Choice(GENDERS), Rule::Optional),
    FieldSpec::new("visaDOB", "Date of Birth", InputKind::Date, Rule::Optional),
    FieldSpec::new(
        "visaMaritalStatus",
        "Marital Status",
        InputKind::Choice(MARITAL_STATUSES),
        Rule::Optional,
    ),
    FieldSpec::new(
        "visaCountry",
        "Country of Interest",
        InputKind::Choice(DESTINATIONS),
        Rule::Required("Please select a country of interest"),
    ),
    FieldSpec::new(
        "visaType",
        "Visa Type",
        InputKind::Choice(VISA_TYPES),
        Rule::Required("Please select a visa type"),
    ),
    FieldSpec::new(
        "visaMessage",
        "Your Requirements",
        InputKind::TextArea,
        Rule::Required("Please provide details about your requirements"),
    ),
    FieldSpec::new(
        "visaDocument",
        "Supporting Documents (optional)",
        InputKind::Upload(UploadPolicy::documents()),
        Rule::Optional,
    ),
];

pub static DOC_PARAMS: &[ParamSpec] = &[
    ParamSpec::new(
        "docName",
        Source::FullName {
            first: "visaFirstName",
            middle: "visaMiddleName",
            last: "visaLastName",
        },
    )
    .labelled("Name"),
    ParamSpec::new("docEmail", Source::Email("visaEmail")).labelled("Email"),
    ParamSpec::new("docPhone", Source::Field("visaPhone")).labelled("Phone"),
    ParamSpec::new("docSex", Source::Field("visaSex")).labelled("Gender"),
    ParamSpec::new("docDOB", Source::Field("visaDOB")).labelled("Date of Birth"),
    ParamSpec::new("docMaritalStatus", Source::Field("visaMaritalStatus"))
        .labelled("Marital Status"),
    ParamSpec::new("docCountryOfInterest", Source::Field("visaCountry")).labelled("Country"),
    ParamSpec::new("docVisaType", Source::Field("visaType")).labelled("Visa Type"),
    ParamSpec::new("docRequirements", Source::Field("visaMessage")).labelled("Message"),
    ParamSpec::new("docAdditionalInfo", Source::Field("visaMessage")),
    ParamSpec::new(
        "docFileUpload",
        Source::Attached {
            field: "visaDocument",
            yes: "Yes",
            no: "No",
        },
    )
    .labelled("Documents"),
    ParamSpec::new("docFileNames", Source::FileNames("visaDocument"))
        .labelled("File Names")
        .or("None"),
    ParamSpec::new("docFileSize", Source::FileSize("visaDocument"))
        .labelled("File Size")
        .or("N/A"),
];

pub static GENERAL_FIELDS: &[FieldSpec] = &[
    FieldSpec::new(
        "name",
        "Full Name",
        InputKind::Text,
        Rule::Required("Please enter your name"),
    ),
    EMAIL,
    FieldSpec::new("phone", "Phone Number", InputKind::Phone, Rule::Optional),
    FieldSpec::new(
        "message",
        "Your Message",
        InputKind::TextArea,
        Rule::Required("Please enter your message"),
    ),
];

pub static GENERAL_PARAMS: &[ParamSpec] = &[
    ParamSpec::new("name", Source::Field("name"))
        .labelled("Name")
        .or(NOT_PROVIDED),
    ParamSpec::new("email", Source::Email("email"))
        .labelled("Email")
        .or(NOT_PROVIDED),
    ParamSpec::new("phone", Source::Field("phone"))
        .labelled("Phone")
        .or(NOT_PROVIDED),
    ParamSpec::new("message", Source::Field("message"))
        .labelled("Message")
        .or(NOT_PROVIDED),
    ParamSpec::new("firstName", Source::FirstWord("name")).or(NOT_PROVIDED),
    ParamSpec::new("lastName", Source::RestWords("name")).or(NOT_PROVIDED),
    ParamSpec::new("formSubmitTime", Source::SubmitTime),
];
