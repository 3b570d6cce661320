use crate::types::cluster::ClusterDefinition;
use crate::types::subject::{Subject, SubjectCategory, SubjectCode};

const SUBJECTS: [(&str, &str, SubjectCategory); 18] = [
    ("eng", "English", SubjectCategory::Compulsory),
    ("kis", "Kiswahili", SubjectCategory::Compulsory),
    ("mat", "Mathematics", SubjectCategory::Compulsory),
    ("bio", "Biology", SubjectCategory::Sciences),
    ("phy", "Physics", SubjectCategory::Sciences),
    ("che", "Chemistry", SubjectCategory::Sciences),
    ("his", "History", SubjectCategory::Humanities),
    ("geo", "Geography", SubjectCategory::Humanities),
    ("cre", "CRE/IRE/HRE", SubjectCategory::Humanities),
    ("agr", "Agriculture", SubjectCategory::Technical),
    ("bus", "Business Studies", SubjectCategory::Technical),
    ("comp", "Computer Studies", SubjectCategory::Technical),
    ("home", "Home Science", SubjectCategory::Technical),
    ("art", "Art and Design", SubjectCategory::Technical),
    ("fre", "French", SubjectCategory::Languages),
    ("ger", "German", SubjectCategory::Languages),
    ("ara", "Arabic", SubjectCategory::Languages),
    ("mus", "Music", SubjectCategory::Languages),
];

pub fn subjects() -> Vec<Subject> {
    SUBJECTS
        .iter()
        .map(|(code, name, category)| Subject {
            code: SubjectCode::builtin(code),
            name: name.to_string(),
            category: *category,
        })
        .collect()
}

pub fn clusters() -> Vec<ClusterDefinition> {
    vec![
        ClusterDefinition::builtin(
            1,
            "Law",
            [&["eng"], &["his", "geo", "cre"], &["mat", "bio", "phy", "che"], &["kis", "bus"]],
        ),
        ClusterDefinition::builtin(
            2,
            "Business, Hospitality & Related",
            [&["mat"], &["eng", "kis"], &["bio", "phy", "che"], &["bus", "geo", "his"]],
        ),
        ClusterDefinition::builtin(
            3,
            "Social Sciences, Media Studies, Fine Arts, Film, Animation, Graphics & Related",
            [
                &["eng", "kis"],
                &["mat", "bio", "phy", "che"],
                &["his", "geo", "cre"],
                &["art", "mus", "bus", "fre", "ger", "ara"],
            ],
        ),
        ClusterDefinition::builtin(
            4,
            "Geosciences & Related",
            [&["mat"], &["phy"], &["che"], &["geo"]],
        ),
        ClusterDefinition::builtin(
            5,
            "Engineering, Engineering Technology & Related",
            [&["mat"], &["phy"], &["che"], &["bio", "geo", "eng", "kis"]],
        ),
        ClusterDefinition::builtin(
            6,
            "Architecture, Building Construction & Related",
            [&["mat"], &["phy"], &["eng", "kis"], &["che", "bio", "art", "geo"]],
        ),
        ClusterDefinition::builtin(
            7,
            "Computing, IT & Related",
            [&["mat"], &["phy", "bio", "che"], &["eng", "kis"], &["comp", "bus", "geo"]],
        ),
        ClusterDefinition::builtin(
            8,
            "Agribusiness & Related",
            [&["mat"], &["bio", "che"], &["eng", "kis"], &["bus", "agr"]],
        ),
        ClusterDefinition::builtin(
            9,
            "General Science, Biological Sciences, Physics, Chemistry & Related",
            [&["mat"], &["bio"], &["che"], &["phy", "geo"]],
        ),
        ClusterDefinition::builtin(
            10,
            "Actuarial Science, Accountancy, Mathematics, Economics, Statistics & Related",
            [&["mat"], &["eng", "kis"], &["bio", "phy", "che"], &["bus", "geo"]],
        ),
        ClusterDefinition::builtin(
            11,
            "Interior Design, Fashion Design, Textiles & Related",
            [&["art", "home"], &["mat", "bio", "phy", "che"], &["eng", "kis"], &["bus", "his", "geo"]],
        ),
        ClusterDefinition::builtin(
            12,
            "Sport Science & Related",
            [&["bio"], &["eng", "kis"], &["mat", "phy", "che"], &["his", "geo", "cre", "bus"]],
        ),
        ClusterDefinition::builtin(
            13,
            "Medicine, Health, Veterinary Medicine & Related",
            [&["bio"], &["che"], &["mat", "phy"], &["eng", "kis"]],
        ),
        ClusterDefinition::builtin(
            14,
            "History, Archeology & Related",
            [&["his"], &["eng", "kis"], &["mat", "bio", "phy", "che"], &["geo", "cre", "bus"]],
        ),
        ClusterDefinition::builtin(
            15,
            "Agriculture, Animal Health, Food Science, Nutrition Dietetics, Environmental Sciences, Natural Resources & Related",
            [&["bio"], &["che"], &["mat", "phy", "geo"], &["agr", "bus", "eng", "kis"]],
        ),
        ClusterDefinition::builtin(
            16,
            "Geography & Related",
            [&["geo"], &["mat"], &["bio", "phy", "che"], &["eng", "kis", "bus"]],
        ),
        ClusterDefinition::builtin(
            17,
            "French & German",
            [&["fre", "ger", "ara"], &["eng", "kis"], &["mat", "bio", "phy", "che"], &["his", "geo", "cre"]],
        ),
        ClusterDefinition::builtin(
            18,
            "Music & Related",
            [
                &["mus"],
                &["eng", "kis"],
                &["mat", "bio", "phy", "che"],
                &["his", "geo", "cre", "fre", "ger", "ara"],
            ],
        ),
        ClusterDefinition::builtin(
            19,
            "Education & Related",
            [&["eng", "kis"], &["mat", "bio", "phy", "che"], &["his", "geo", "cre"], &["bus", "art", "fre", "ger", "ara"]],
        ),
        ClusterDefinition::builtin(
            20,
            "Religious Studies, Theology, Islamic Studies & Related",
            [&["cre", "ara"], &["eng", "kis"], &["mat", "bio", "phy", "che"], &["his", "geo"]],
        ),
    ]
}
