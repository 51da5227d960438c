//! The canonical 4096-word list used to encode recovery phrases.
//!
//! Every entry is lowercase ASCII, 4 to 8 characters long, and distinct
//! from every other entry in its first four characters. This lets a
//! reader abbreviate any word in a phrase down to its first four
//! letters without introducing ambiguity. Changing any entry, or its
//! position in the table, breaks compatibility with phrases already
//! written down by users: treat this table as a frozen wire format.

/// 4096 words, indexed `0..4096`, sorted lexicographically.
pub(crate) static WORDS: [&str; 4096] = [
    "baikausp", "baimeas", "bain", "baird", "baisflep", "bait", "balayss", "bamp",
    "banoun", "barheed", "barn", "barounce", "barp", "baschab", "basear", "bash",
    "basince", "basstoyl", "bast", "batoym", "baub", "bauird", "baunt", "baup",
    "baurp", "bauserm", "bayff", "bayld", "baymair", "bayng", "bayrousp", "baysaick",
    "baytayst", "beaeast", "beag", "bealp", "beamaist", "beang", "beasp", "beax",
    "beeen", "beefum", "beellulp", "beembelt", "beenaulp", "beess", "beet", "beeve",
    "beex", "beflees", "beglied", "beiblut", "beick", "beiflirl", "beig", "beilurk",
    "beimont", "beind", "beismair", "beith", "belud", "bemouze", "bemvoub", "benouff",
    "benthrin", "berclil", "berdayst", "berm", "besp", "beze", "bick", "bieeark",
    "bielaulp", "biem", "biend", "biep", "biert", "bieseil", "bietonk", "biezart",
    "biff", "bilalk", "bilk", "bilsprib", "binsceb", "biplaurp", "birn", "birpriss",
    "birt", "birzeilp", "bisk", "bitsaik", "biweack", "blaff", "blailm", "blalp",
    "blam", "blanoart", "blaquoux", "blarayg", "blask", "blat", "blaurn", "blave",
    "blayrm", "bleasnou", "bleck", "bleerm", "bleird", "blelp", "blemoum", "blence",
    "bleraisp", "blessoyn", "bleyald", "blib", "blick", "blies", "blilm", "blim",
    "blind", "blirl", "bliss", "bloack", "blok", "blolp", "blom", "blon",
    "bloox", "bloraurl", "blosh", "blouss", "blox", "bloylt", "bluck", "bluloyrl",
    "blump", "blurm", "blusp", "bluvonk", "boag", "boalp", "boam", "boant",
    "boap", "boarl", "boash", "bold", "bolp", "bomab", "bond", "boolast",
    "boong", "boorl", "boosmaul", "bootoant", "boove", "boox", "borcrail", "borl",
    "bosh", "both", "bouautop", "boueemp", "boulish", "boumau", "bound", "bouousp",
    "boush", "bout", "boux", "bouze", "boyaum", "boyg", "boyk", "boylt",
    "boynbant", "boypeath", "boyrm", "boyst", "boyth", "braish", "bralp", "bramhurl",
    "brap", "brareesk", "brash", "braurt", "brayx", "brazoom", "breast", "breetoyn",
    "breip", "brelk", "bremosk", "brerayn", "bress", "brethelm", "brib", "brierk",
    "briloonk", "brint", "brirm", "brix", "broartib", "brock", "brolp", "bromwhil",
    "bronce", "broon", "brop", "broroab", "brous", "broyb", "brul", "brumax",
    "brunhol", "brurk", "bruth", "bruve", "bruze", "bubrir", "buff", "bulbout",
    "buleam", "bumchild", "bumgusp", "bung", "bunk", "burl", "burn", "bush",
    "bussoyth", "butcroup", "buteed", "buthourd", "buve", "caff", "caid", "cailoog",
    "cainourn", "cair", "cais", "caiteang", "caive", "caleer", "cant", "canurt",
    "card", "cark", "carl", "cateve", "cattroop", "catyealk", "cauff", "cauk",
    "caulsnad", "caumaub", "caunayl", "cauprove", "cauraynd", "cauve", "cayaize", "cayck",
    "cayd", "cayglei", "caylt", "caynt", "cayp", "cayrd", "caysoad", "ceab",
    "ceadog", "ceagrex", "cealdun", "ceamp", "ceance", "ceark", "ceas", "ceatourk",
    "ceeak", "ceeck", "ceelick", "ceemp", "ceendrin", "ceepairp", "ceerm", "ceest",
    "ceetais", "ceeve", "ceilm", "ceim", "ceioyn", "ceirl", "ceish", "ceith",
    "ceize", "celt", "cemp", "cence", "cenhailt", "cennei", "cenweern", "cerl",
    "cern", "cesceil", "cesnoynt", "cesquaug", "cest", "cethrarp", "cetjeek", "chack",
    "chaff", "chaim", "chak", "chamoyrl", "chaoave", "charead", "chask", "chaund",
    "chave", "chaynt", "cheass", "check", "cheeb", "cheirt", "chel", "chence",
    "cherl", "chesk", "chet", "chib", "chiex", "chiff", "chik", "child",
    "chim", "chince", "chiroang", "chive", "choam", "chob", "choff", "choldunt",
    "chong", "choos", "chort", "chosit", "choulk", "chox", "choylm", "chuck",
    "chult", "chund", "chur", "chuss", "chutoys", "chuze", "ciecird", "cied",
    "cieg", "cielourn", "cieneerk", "cieoyl", "ciern", "ciesp", "cilk", "cilmoorp",
    "cimgoarp", "cimoy", "cimquoyn", "cimvilk", "cimwoub", "cince", "cind", "cinswump",
    "cint", "cirask", "cirn", "cirt", "cisaid", "cisk", "cisrilk", "clag",
    "claip", "clamoth", "clarm", "clasp", "clatoa", "claunoum", "clave", "clax",
    "clayrl", "cleast", "clechilp", "cleeri", "clein", "clelt", "clenzok", "clereax",
    "clesk", "cleze", "clier", "cliff", "cliheerk", "clind", "clip", "clisint",
    "clitbuze", "clize", "cloarp", "clobrilk", "clold", "clomeik", "clonold", "clookaum",
    "closh", "clot", "clourpep", "clove", "clox", "cloyrk", "club", "cluck",
    "clug", "clum", "clunce", "clurk", "clush", "cluve", "coalt", "coark",
    "coask", "coat", "coaze", "colayve", "colchail", "colk", "coloyr", "colp",
    "comeesp", "comloor", "cond", "congeast", "cont", "conyerp", "conzolk", "coolm",
    "coong", "coop", "coor", "coosp", "cooteve", "corl", "corn", "corp",
    "cosp", "coumurt", "counlien", "courk", "cousk", "coutouff", "coyff", "coyk",
    "coymzalm", "coynce", "coypealt", "coyreeff", "coysp", "coyttoze", "coyx", "craind",
    "crang", "crao", "crap", "crarl", "crask", "craurl", "crayck", "crearm",
    "cred", "creerod", "creix", "creleem", "cremauk", "crenam", "crern", "cress",
    "cretaze", "crie", "crigre", "crilp", "crimp", "crince", "criourl", "crirk",
    "crisog", "crit", "crive", "croard", "crocheak", "crod", "crolt", "cromeiog",
    "cronfisk", "croom", "crorl", "crosskat", "crot", "crounk", "crox", "croyrook",
    "crud", "crug", "crul", "crumcesp", "crunoynt", "crup", "crurm", "crutelp",
    "culash", "culk", "culm", "culolep", "culsouve", "cult", "cumbirk", "cumeaix",
    "cumoyck", "curead", "curl", "curn", "cusaiss", "cusfrick", "cush", "cusmient",
    "cusp", "cuss", "cusu", "cutskert", "dafop", "daick", "dailm", "daimince",
    "daing", "daip", "dairk", "dais", "daiteck", "daize", "daluss", "dameelk",
    "damfris", "dance", "dant", "darl", "dasayrd", "dasblad", "dascraur", "dass",
    "datanvi", "datiscai", "dauff", "dault", "daum", "daund", "daurp", "dautoast",
    "dauuck", "dayck", "dayeert", "daylk", "daym", "daynplim", "dayp", "dayrk",
    "daysealm", "dayt", "dayx", "dayzel", "deaff", "dealis", "deam", "deap",
    "dear", "deas", "deeaug", "deecark", "deelp", "deemveth", "deert", "deesdeem",
    "deeteasp", "deff", "deib", "deilm", "deimp", "dein", "deiroox", "deis",
    "deiteasp", "deiurk", "deld", "delm", "dembayk", "demeimp", "denoolt", "deorm",
    "dert", "desauth", "desproux", "detbouth", "detoung", "deulm", "deve", "dieb",
    "died", "diegluk", "dielcei", "diem", "diend", "dieroysk", "diesould", "dietriek",
    "diex", "dieze", "dimaink", "dimol", "dimspos", "dind", "dinsneeb", "dipruld",
    "dirk", "dirm", "dirquour", "disaim", "diselm", "dist", "ditbeen", "ditoass",
    "doald", "doam", "doant", "doap", "doarl", "doask", "doath", "doave",
    "doaze", "docrairm", "doisp", "dolbrarm", "dolt", "domay", "donce", "donk",
    "donsmelm", "dooeed", "dook", "doolk", "doomp", "doonplek", "doorl", "dooseem",
    "dooth", "dooze", "doreince", "dorl", "dorm", "dorn", "dorvaix", "dosh",
    "dosp", "doss", "dosweeff", "dotpaurt", "doubloox", "douff", "doul", "dounark",
    "doup", "dousealm", "douve", "douze", "dove", "doyaisp", "doyff", "doyg",
    "doylp", "doynd", "doyrburp", "doysk", "doyt", "doyx", "doyze", "drag",
    "drail", "dramod", "drarm", "drass", "dratayth", "draumong", "drawhoo", "draynce",
    "dreamp", "dreer", "dreig", "drellil", "drend", "drerd", "drex", "drierd",
    "drig", "drik", "drilk", "drimp", "drirt", "driss", "drivielm", "droat",
    "drod", "drolk", "droneap", "droong", "drop", "drorm", "drosk", "droth",
    "drouck", "drove", "droyseck", "drubeirm", "druff", "drug", "druk", "drump",
    "drunsmie", "drup", "drur", "drusk", "drut", "duck", "dulgoyve", "dumob",
    "dump", "dumvog", "dunk", "dunt", "duriesp", "durm", "durt", "dusdreab",
    "duseence", "duthrick", "dutthoag", "fabaurt", "faid", "faig", "faileeap", "faiop",
    "faip", "faisp", "faithrem", "falseilm", "famcoust", "famjoog", "famwhost", "fansprot",
    "farfrax", "farn", "farp", "fasea", "fasin", "fasjieck", "fass", "fath",
    "faturur", "fauck", "faud", "fauk", "faulaud", "faumoosh", "faunk", "fauss",
    "fautjank", "faux", "fayck", "faylk", "faymiss", "faynaust", "fayooth", "fayrt",
    "faysh", "faytieve", "fayvoyng", "feaamp", "feal", "feanoolm", "feaoath", "feap",
    "fearn", "feash", "feeff", "feeirern", "feek", "feelp", "feemp", "feenk",
    "feesing", "feetealp", "feex", "feeze", "feilcoux", "feimool", "feinvirt", "feisk",
    "fejung", "feld", "felp", "femoan", "femsteib", "fend", "fenouve", "fent",
    "fern", "feselei", "fesh", "fesneix", "fess", "fest", "feth", "fick",
    "fiek", "fiert", "fiess", "fieth", "fiex", "fieze", "fild", "filpoyld",
    "fing", "fird", "firl", "fiseaff", "fisquorp", "fist", "fitarzee", "fith",
    "fize", "flad", "flaince", "flal", "flamwit", "flant", "flarn", "flasurn",
    "flaur", "flave", "flayck", "fleax", "fleemang", "fleirk", "fleld", "flemp",
    "fleneas", "flerm", "fles", "flet", "fliclayt", "flieze", "flig", "flilm",
    "flimgock", "flioonce", "flip", "flirloyn", "flive", "floaff", "flog", "flolous",
    "flom", "flong", "flooff", "floreirm", "floszo", "flotoalp", "flourp", "floyrl",
    "fluck", "flueal", "fluff", "flul", "fluneang", "flurp", "fluseant", "flutild",
    "foack", "foaet", "foak", "foalp", "foam", "foank", "foarm", "foash",
    "foat", "foave", "foayx", "fock", "fold", "fommayth", "fond", "fonskump",
    "font", "foobrin", "foolt", "foomp", "foonce", "foop", "foord", "foostoy",
    "footirt", "foove", "foox", "ford", "foreet", "forfeart", "fork", "forn",
    "fortusp", "fotblar", "fotgearl", "fouflayp", "foug", "foulayx", "foumak", "founyaux",
    "fououox", "foup", "fouriern", "foushesh", "foyff", "foyld", "foymairt", "foyrm",
    "foysierk", "foyx", "fraiss", "fralk", "framosp", "frank", "frarl", "frasp",
    "fraut", "frax", "frays", "freanaul", "freb", "fred", "freenk", "freirk",
    "frelk", "fremswek", "frenoord", "frerk", "fres", "frettay", "frient", "frik",
    "frilm", "frimauk", "frinoust", "fripount", "frir", "frisplat", "frith", "frix",
    "froast", "frolk", "fron", "froomjei", "frort", "frotosp", "frousp", "frove",
    "frox", "froyt", "froze", "fruff", "frulk", "frunjind", "frurm", "frus",
    "fuff", "fulauze", "fulim", "fult", "fung", "funskove", "fuouve", "fureib",
    "futfest", "futvaush", "gabroast", "gaff", "gafloonk", "gaig", "gailfilm", "gaimp",
    "gaind", "gairm", "gaisk", "galtriex", "gamnealp", "gamp", "garenint", "gark",
    "garskeit", "gask", "gass", "gatthreb", "gaub", "gaulur", "gaump", "gaunosp",
    "gaurd", "gauss", "gaylchik", "gaymsnax", "gaynk", "gayreve", "gayveisk", "geab",
    "geak", "geamaus", "geanaump", "gearp", "geasterd", "geck", "geeeil", "geekus",
    "geelfisp", "geenould", "geern", "geetheet", "geid", "geimbrik", "geiroynt", "geith",
    "geiveest", "gejeit", "gelk", "gelp", "gemack", "geon", "gesien", "gess",
    "getail", "giedourt", "gieeeeit", "gieird", "gielp", "giend", "giest", "gieve",
    "gilcauss", "giloyrm", "gilprest", "gilshos", "gimcroap", "gimimp", "gimoyk", "gink",
    "ginskove", "giraince", "girkisk", "girm", "gisgond", "gisjor", "gisoynk", "giss",
    "glaff", "glaiss", "glalt", "glant", "glarjayl", "glasesk", "glault", "glayeisk",
    "gleatoub", "gleb", "gleest", "gleilk", "gleleish", "glend", "glerp", "gless",
    "gleth", "gleyieve", "gleze", "glieliff", "glik", "glileirm", "glimp", "glinkarn",
    "gliourp", "glip", "glirn", "glize", "gloarp", "glolp", "glom", "glonimak",
    "gloonith", "glorl", "glosp", "glottrad", "gloulk", "gloys", "gloze", "gluieve",
    "gluld", "glunt", "glup", "gluroock", "glusab", "gluze", "goalp", "goanmek",
    "goaont", "goar", "goaslilp", "goaze", "gomit", "gonce", "gong", "gonspeex",
    "goofom", "gookayt", "goolk", "goon", "gooral", "goost", "goox", "gosflayx",
    "gotkiend", "gotord", "goub", "gouck", "gouff", "gougloal", "goulk", "goump",
    "gounoynt", "gouousp", "gourd", "goush", "gouth", "gouze", "goyax", "goyck",
    "goyff", "goylt", "goymound", "goynomp", "goyrt", "goyst", "goyze", "graiail",
    "gramailk", "grank", "graroarn", "graterix", "graurd", "grayeirl", "gream", "greend",
    "greff", "greint", "grenjunt", "grereack", "gresk", "grierp", "grik", "grilm",
    "grimp", "grink", "grirt", "grish", "gritat", "grix", "groance", "grock",
    "grod", "grok", "grolk", "grond", "grooeack", "grort", "grosh", "grottoyb",
    "ground", "groyrl", "grulp", "grureink", "grusp", "grut", "gruze", "guek",
    "gulamox", "gulm", "guloarp", "gump", "gung", "gunoung", "gurmeng", "gurn",
    "gurp", "gursag", "haeelm", "hagrub", "haib", "haig", "haik", "hailm",
    "haimaurp", "haint", "haip", "haisk", "haitfor", "halveed", "hanert", "hank",
    "hard", "hark", "harl", "harm", "harp", "harqueed", "haseack", "hashoyrp",
    "hast", "hasueilm", "hateld", "haugorp", "haulk", "haung", "hauoylm", "haurm",
    "hausiff", "hautounk", "hauve", "hayk", "hayl", "haynourp", "hayrd", "haysoyth",
    "haytuird", "heaeeve", "healerm", "heamslug", "heanurt", "hear", "heash", "heatdes",
    "heaze", "heck", "heeld", "heemilk", "heeng", "heerm", "heess", "heetoth",
    "heeve", "heeze", "heib", "heiielp", "heim", "hein", "heioyze", "heirp",
    "heiss", "heitad", "heix", "heize", "hemp", "hend", "herk", "herl",
    "herm", "heseass", "hesp", "hestourk", "hetayb", "hetstrus", "heve", "heze",
    "hieaup", "hieb", "hielook", "hiemgeat", "hienk", "hierirl", "hiess", "hietiem",
    "hiff", "hilfloal", "hilt", "himroysk", "hince", "hinimest", "hirl", "hisoresk",
    "hitjusp", "hoab", "hoag", "hoalumoa", "hoam", "hoaroyst", "hoashain", "hoatoult",
    "hofeern", "hoff", "holk", "holwaint", "homsnays", "hont", "hooairp", "hooff",
    "hoold", "hoomp", "hoond", "hoorm", "hoosh", "hootdiel", "hoouk", "hoove",
    "hork", "hort", "hosend", "hosh", "hosiemar", "hoswhoym", "hotcoord", "hoump",
    "houryath", "houseist", "houze", "hove", "hoyauth", "hoyl", "hoymkaze", "hoynce",
    "hoyrp", "hoysau", "hoytout", "hoyve", "hoyx", "huagail", "hueiek", "hult",
    "hunk", "hunmayb", "hunthin", "huraub", "hurielk", "hurm", "hursance", "husfauze",
    "husmaick", "husnieng", "hust", "hutier", "jagroymp", "jaimtost", "jaion", "jairon",
    "jaisoast", "jaitvelk", "jancred", "jand", "janslost", "jarjoak", "jasoaze", "jasreirk",
    "jataick", "jath", "jaub", "jauff", "jaumdox", "jaun", "jaur", "jaus",
    "jaut", "jauze", "jayck", "jayk", "jaylut", "jaym", "jayng", "jayoomp",
    "jayrd", "jaysh", "jaytscop", "jayuld", "jeaaird", "jeab", "jeaff", "jealt",
    "jeameek", "jeaolm", "jeap", "jearulk", "jeask", "jeatut", "jeeff", "jeeg",
    "jeeloyve", "jeem", "jeent", "jeep", "jeerm", "jeesdiet", "jeeth", "jeeze",
    "jeib", "jeies", "jeig", "jeim", "jeiniex", "jeiraisk", "jeisean", "jeitear",
    "jeld", "jelk", "jelt", "jemal", "jemoump", "jemp", "jent", "jeoss",
    "jerd", "jerl", "jert", "jescraus", "jeth", "jetpeesp", "jetseark", "jeurn",
    "jeve", "jick", "jieck", "jieeelm", "jieff", "jiek", "jielp", "jiem",
    "jiendarp", "jiep", "jierd", "jiest", "jiet", "jieve", "jimp", "jint",
    "jisstend", "jisteff", "jitbred", "jith", "jive", "joack", "joag", "joak",
    "joalm", "joance", "joap", "joard", "joash", "joath", "jolhaynt", "jomblult",
    "jomkeirn", "jomp", "jondos", "jongienk", "joofist", "jook", "joolayp", "joond",
    "jooplair", "joorl", "joost", "jormoum", "joroyng", "josdoack", "josk", "jotflais",
    "jotoult", "jottur", "joud", "jouff", "joulp", "joump", "jounk", "joup",
    "jourp", "jouslep", "jouti", "jove", "jovieff", "joyld", "joymaick", "joyndrep",
    "joyr", "joysh", "joytoass", "jucolk", "jumiend", "jump", "jung", "jurd",
    "jureeze", "jurfoyrt", "jurpaur", "jusdrob", "jush", "jusierp", "jusoush", "justrux",
    "juve", "juze", "kaiaurp", "kaib", "kaig", "kailist", "kair", "kais",
    "kaitok", "kaive", "kamayld", "kamveelm", "kancrem", "kant", "kash", "kask",
    "kass", "kateis", "kauck", "kauleaze", "kaumeag", "kaund", "kaurnaib", "kautierm",
    "kaux", "kauyeern", "kauze", "kaygeth", "kayk", "kaylgoox", "kaym", "kayng",
    "kayroost", "kaysoant", "kayteak", "kayzirt", "keaaysh", "keag", "keald", "keant",
    "kearl", "kebloff", "keeaub", "keeck", "keeeald", "keeff", "keeg", "keelt",
    "keemout", "keent", "keeryeat", "keesk", "keeth", "keib", "keick", "keilt",
    "keimlung", "keink", "keip", "keirbilt", "keiss", "keitund", "keive", "kelouth",
    "kemvayze", "kemwhayp", "kence", "keng", "keoolk", "keouck", "keparp", "kervierm",
    "keseeze", "kesk", "ketealm", "ketlaunt", "ketoyss", "kibleack", "kieesk", "kiem",
    "kien", "kierl", "kieseeze", "kiet", "kiex", "kilk", "kinoag", "kirk",
    "kish", "kisoost", "kispur", "kitoant", "kitquild", "koab", "koaloynd", "koamoank",
    "koarend", "koashiss", "koat", "kolm", "kololt", "kolwin", "komeask", "konjoolt",
    "kont", "kooas", "koob", "kood", "kook", "koolm", "koomoar", "koong",
    "koor", "kooth", "koove", "koox", "kooyilm", "koroor", "korskeis", "kosher",
    "koss", "koth", "koud", "koukauk", "koulk", "koumpild", "kounk", "kourm",
    "kouss", "kout", "kouze", "koyb", "koylist", "koymp", "koynzurl", "koyrm",
    "koytfeag", "kuglayst", "kunoymp", "kuolp", "kurk", "kurstrai", "kush", "kusouk",
    "kuss", "kusvuk", "kutbealt", "kuve", "laayx", "lack", "laham", "laidoolt",
    "laieelp", "lailig", "laimbam", "lainost", "laioonce", "lairn", "laiss", "laitoash",
    "laivoyb", "lalm", "lalt", "lamtraff", "landreld", "lark", "larl", "larp",
    "lart", "lasbount", "lasp", "laswoax", "lath", "laueank", "lault", "laumslub",
    "laurskei", "lauve", "lave", "layb", "layck", "laylt", "laym", "laynince",
    "layr", "layst", "laytieg", "layve", "leaff", "leag", "leaipaut", "leanoog",
    "leaou", "lear", "leass", "leateish", "lebreand", "leeaus", "leek", "leelize",
    "leemeint", "leenence", "leerp", "leess", "leetaurd", "leex", "lefleern", "leig",
    "leik", "leilpint", "leineick", "leiroyk", "leiseith", "leitaynd", "leive", "leizoaze",
    "leld", "lelm", "lemp", "leng", "leolenk", "lerd", "lerglig", "lerthaun",
    "lesmirm", "lesp", "less", "leth", "letyie", "leve", "liailolk", "lieck",
    "lied", "lielfay", "liem", "liencled", "lierl", "liestald", "lieth", "liff",
    "lilon", "linearn", "link", "linwheck", "lirt", "lish", "lissmoog", "list",
    "litchove", "livend", "load", "loaff", "loalnent", "loamoass", "loance", "loar",
    "loaspilm", "loatoack", "lolkiern", "lomhayg", "lomoyze", "lomp", "lomteed", "long",
    "lonk", "lonoalk", "loob", "loold", "loomoove", "loon", "loop", "loord",
    "loosk", "lorn", "loryung", "losirm", "losp", "lost", "lotcoub", "lotoylp",
    "lottaiff", "louaylk", "loud", "louff", "loug", "loulk", "loumzask", "lounaing",
    "louoob", "loup", "lourm", "lousamp", "loutchi", "louze", "love", "loyd",
    "loyk", "loylbelk", "loynt", "loyoush", "loyrn", "loysouk", "loyt", "loyvort",
    "loyze", "ludoux", "luff", "lulouk", "lumnaud", "lumoze", "lumplon", "lumzerd",
    "lunce", "luolt", "lurmup", "lurt", "lusern", "lusjoyng", "lutjern", "lutquex",
    "lutskont", "luze", "madoulp", "maff", "mailfux", "maimorl", "mainflay", "mairplub",
    "mais", "maith", "marl", "marove", "marp", "masik", "masshie", "mastoylp",
    "maulp", "maumoonk", "maund", "maurd", "mauss", "mautoop", "maux", "mave",
    "maylm", "maymoyr", "mayng", "mayouth", "mayrt", "maysees", "maytoump", "maze",
    "meack", "mealk", "meant", "mearaick", "meask", "meatood", "mebreem", "meecoass",
    "meenpul", "meep", "meerl", "mees", "meeweink", "meib", "meig", "meing",
    "meirm", "meiss", "meitfoub", "melp", "memoost", "menk", "menmove", "ment",
    "mereg", "merhaith", "mesgayrp", "mesh", "metgremp", "meve", "meze", "mibrould",
    "mieaint", "mieb", "mieck", "mieg", "mieloorn", "miem", "mienseze", "miesp",
    "mietvag", "milm", "milur", "mimkaynd", "mince", "mint", "mirmen", "mirn",
    "mist", "mittit", "mive", "moad", "moalailp", "moamoies", "moan", "moarn",
    "moas", "moatheel", "mochaisp", "moeick", "molp", "momgau", "monce", "monoul",
    "moog", "moolt", "moomp", "moond", "moopoug", "moorn", "moost", "mootpon",
    "mooug", "moove", "morn", "mosh", "moszulm", "moteid", "mouisk", "mouluss",
    "moumnoab", "moup", "mourd", "moust", "moutayrm", "mouvoarp", "move", "moylod",
    "moymp", "moynath", "moyrbove", "moysh", "moytoait", "muck", "mulk", "mulor",
    "mumjauss", "mump", "munce", "munierm", "murl", "mush", "musp", "must",
    "mutbrod", "mutcoum", "naglirm", "nagrayt", "naib", "naid", "naiff", "naig",
    "nailk", "naimirn", "naind", "nairp", "nais", "naitoys", "nalfir", "nalierl",
    "namgeave", "namshest", "nance", "nang", "nanourd", "narl", "narososk", "narp",
    "naseast", "nask", "nasooux", "nath", "natoump", "naud", "naulaurk", "naumfart",
    "naunk", "nauourp", "nausp", "nayck", "nayd", "naylwoab", "nayp", "nayrk",
    "naysk", "naytayrm", "nayvouck", "naze", "neaff", "neak", "neant", "near",
    "neast", "neath", "neehel", "neeig", "neek", "neelp", "neemeick", "neend",
    "neep", "neeriep", "neesk", "neiault", "neid", "neig", "neik", "neil",
    "neimosk", "neink", "neir", "neisk", "neithunt", "neiunesh", "neix", "nelrault",
    "nemeoald", "nenait", "nence", "nern", "nerp", "nesk", "nesnis", "neth",
    "netpauth", "nibrart", "nieag", "nieb", "nieff", "nielt", "niemp", "nienpond",
    "niep", "nier", "niesaink", "nietees", "niff", "nild", "nilscoab", "nimoymp",
    "nimp", "ninsteir", "nint", "nirstos", "nisceag", "niseirl", "nisuve", "nitdount",
    "niteve", "nith", "niuaund", "noack", "noafrand", "noak", "noald", "noamink",
    "noant", "noarielm", "noasp", "noax", "nocraysh", "noff", "nolarn", "nolk",
    "noltird", "nomspeet", "nondaild", "noogarl", "noolk", "noomiem", "noonoos", "noooyss",
    "noos", "nooteamp", "noraud", "nord", "norm", "noroop", "norp", "nort",
    "noruteir", "nosk", "noteeze", "notird", "noug", "noul", "nouniet", "nousk",
    "noux", "nove", "noyck", "noyd", "noyff", "noylm", "noynce", "noyoam",
    "noyried", "noysh", "noyveek", "noyx", "noze", "nucloass", "nulm", "nulpeeth",
    "numilp", "nump", "nunce", "nunwack", "nurd", "nurl", "nurooas", "nurp",
    "nusaunce", "nuveib", "paiald", "paick", "paik", "pailm", "paimp", "paing",
    "pair", "paiss", "paitzeld", "palk", "park", "part", "pascayss", "pash",
    "pasooff", "patayff", "paub", "paueert", "pauloyrt", "paunk", "paurk", "pausbier",
    "pautence", "paux", "pave", "payat", "payck", "payd", "payk", "paylm",
    "paym", "paynailm", "payr", "payst", "payve", "paze", "peab", "peadaiff",
    "peak", "peal", "peamolk", "peaneelk", "peark", "peash", "peaze", "peeg",
    "peelk", "peemearp", "peepriek", "peert", "peesreep", "peetab", "peeze", "peff",
    "peient", "peiff", "peig", "peik", "peilt", "peint", "peip", "peirt",
    "peisayg", "peitheem", "pelkud", "pelp", "pemcoolm", "pemjaze", "pemp", "pemteeck",
    "penscuth", "periek", "pert", "peslaing", "peuoun", "peze", "pieck", "piel",
    "piemp", "pienduk", "piep", "pierfork", "piex", "pieze", "pild", "pilloak",
    "piloor", "pilp", "pink", "pireence", "pirk", "pirm", "piroab", "pish",
    "piswoylp", "pitmarm", "plaeeg", "plais", "plalzive", "plam", "planbix", "plarn",
    "plaseaff", "plaunt", "playnk", "pleasp", "pleen", "pleirk", "plelm", "plemp",
    "plernuck", "ples", "plet", "pleve", "pliaild", "plie", "plikeik", "plilp",
    "plint", "pliraisp", "pliser", "ploalt", "plod", "ploies", "plomerl", "plond",
    "ploong", "plorn", "plososk", "ploth", "plousour", "ployd", "plult", "plumbisk",
    "plurk", "plush", "poaausp", "poag", "poahaus", "poang", "poaoulm", "poapraig",
    "poaroug", "poask", "poat", "poave", "pock", "poff", "pomp", "pomwield",
    "ponbluk", "pong", "ponoaze", "ponwhoap", "pooharn", "pooleat", "poomp", "poong",
    "poorp", "poosp", "pootiel", "pooze", "porn", "port", "poss", "poth",
    "poukalk", "poulk", "poumoyn", "poun", "pourl", "pouss", "powhaux", "poyair",
    "poyciend", "poyd", "poyleast", "poysosh", "poyt", "poyze", "prab", "praink",
    "pral", "prasp", "prat", "praux", "prayp", "preag", "preck", "preerp",
    "preisp", "prelm", "premosk", "prenaim", "preol", "prerroap", "presprat", "preth",
    "pridrilp", "priesh", "prik", "pril", "primix", "prinaynk", "prirk", "pris",
    "prize", "proam", "prock", "proff", "progromp", "prolp", "promolm", "proneilp",
    "proorn", "pros", "prot", "prourp", "prove", "prox", "proyff", "prul",
    "prum", "prunaur", "prurt", "prush", "prutet", "puist", "pulfleal", "pulolt",
    "pulp", "pult", "punbreip", "punce", "pungeib", "punt", "puplousk", "purd",
    "purm", "puth", "puup", "quack", "quailm", "qualm", "quam", "quanoyrl",
    "quar", "quasnop", "quaterp", "quaurk", "quave", "quayrm", "quaze", "quealug",
    "queck", "qued", "queeb", "queive", "quemp", "quenk", "quep", "quern",
    "quesh", "quib", "quick", "quier", "quiieve", "quilp", "quim", "quince",
    "quiraysp", "quist", "quith", "quive", "quix", "quoan", "quogrees", "quok",
    "quold", "quomp", "quonk", "quoorp", "quorm", "quosoym", "quotbeeg", "quound",
    "quox", "quoys", "quoze", "quuayrk", "quub", "quug", "quulm", "quumyir",
    "quun", "quurd", "quus", "quutrak", "quuyofep", "raayzird", "rack", "raifeit",
    "raik", "railp", "raim", "raind", "raip", "raird", "raisp", "raitbank",
    "raive", "raize", "ralp", "ramgouth", "randrirl", "ranfaus", "rark", "rarok",
    "rasack", "rasplirn", "rast", "ratearm", "rauaird", "raudriet", "rauff", "raullei",
    "raump", "raunk", "raurn", "rauth", "rauwoolt", "rave", "rayff", "rayg",
    "rayk", "raylince", "raymraup", "rayrerm", "raytist", "reagult", "realm", "reand",
    "rearp", "reath", "reeck", "reelp", "reemos", "reent", "reerp", "reetglad",
    "reezoump", "regroart", "reiayrt", "reinea", "reirk", "reiss", "relk", "relswunt",
    "remaylp", "renauk", "rence", "rennunat", "rern", "rest", "reth", "retoong",
    "reze", "rieain", "rielpit", "riem", "rienzest", "rierou", "ries", "rihietog",
    "rink", "rird", "rirrong", "risayss", "riss", "rist", "ritslayx", "rive",
    "roaff", "roalt", "roamkosh", "roang", "roaosh", "roar", "roast", "roatshet",
    "roff", "rolfuk", "rolt", "romp", "rond", "rongee", "ronswold", "rood",
    "rook", "roolaix", "room", "roonk", "roorskox", "roost", "root", "roove",
    "roraulp", "roroold", "rosh", "rosp", "rotbrug", "roteelk", "rotrouff", "rotsnoyl",
    "rouck", "roug", "roul", "rounsom", "rourgays", "rousjeil", "roylk", "roym",
    "royng", "royrd", "royst", "royth", "rulp", "rult", "rump", "rurfresp",
    "rusp", "russ", "sack", "saff", "saib", "saick", "sailp", "saimp",
    "saing", "saiolp", "sairl", "saist", "saitar", "sakilt", "salp", "samloyve",
    "samrool", "sanaul", "sang", "sant", "saoosoog", "sask", "sasp", "sast",
    "satplier", "satum", "sauck", "sauk", "saulm", "saum", "saurd", "sayld",
    "saymtoy", "saynjaup", "sayrp", "scab", "scairl", "scamosh", "scan", "scarn",
    "scath", "scaulp", "scayld", "scea", "sceeliff", "sceib", "scelin", "scenk",
    "sceoym", "scerisp", "scesp", "scetourl", "scid", "scield", "scig", "scim",
    "scind", "scirp", "scist", "scith", "scize", "scoant", "scod", "scoist",
    "scol", "scong", "scootei", "scoss", "scou", "scove", "scoyng", "scoze",
    "scrave", "scrert", "scrienk", "scroump", "scrus", "scuiesp", "scul", "scumoyrk",
    "scunence", "scuraulk", "scuss", "scuth", "seack", "seaeaze", "seansass", "seaoar",
    "searp", "seash", "seath", "seavuze", "seax", "seeamp", "seeff", "seek",
    "seeld", "seemkulk", "seenk", "seep", "seer", "seex", "seeze", "seilt",
    "seim", "seing", "seiriem", "seldralt", "selskaik", "selt", "semfleel", "semhieng",
    "semstieb", "serd", "serm", "seshoont", "sesp", "setoorl", "shack", "shair",
    "shalkeag", "shamzeir", "shance", "shar", "shasoyck", "shatvulm", "shaust", "shayrt",
    "shaze", "shead", "sheenk", "sheiss", "shelhied", "shemailt", "shence", "sherd",
    "shesk", "sheturoo", "sheve", "shib", "shicielt", "shienang", "shiff", "shilum",
    "shim", "shinoasp", "shist", "shitstax", "shize", "shoal", "shogloyt", "sholuiex",
    "shon", "shooult", "shord", "shosjak", "shot", "shous", "shoyeax", "shoze",
    "shuck", "shuff", "shumeex", "shunoave", "shurn", "shutayn", "shuve", "sieb",
    "sieen", "sielk", "siemp", "sienk", "sierhelk", "siesem", "sietouff", "siex",
    "sieze", "sild", "silm", "silpith", "silslaux", "sirbosk", "sirclout", "sireerp",
    "sirp", "sirwairl", "siseelp", "sisfouve", "siss", "skaat", "skacrald", "skaitsou",
    "skanloap", "skaryent", "skas", "skath", "skault", "skax", "skaylm", "skeaoysk",
    "skeck", "skeerp", "skeir", "skelp", "skemaing", "skeng", "skep", "skerp",
    "skesp", "sketzaum", "skeve", "skeyousp", "skeze", "skietemp", "skilm", "skink",
    "skis", "skitcoop", "skoasum", "skolm", "skonoorl", "skoonul", "skorp", "skosh",
    "skoust", "skoysoag", "skueik", "skuff", "skulkayn", "skumeng", "skunk", "skup",
    "skurp", "skutauk", "skuve", "skux", "slack", "slaint", "slamp", "slask",
    "slat", "slaumeeg", "slayld", "sleak", "sleb", "sleerk", "sleg", "sleireze",
    "slelp", "slence", "slerm", "sles", "sletoyl", "sleve", "slib", "sliek",
    "sligloyr", "slikoang", "sliloym", "slim", "slince", "slionk", "slip", "slir",
    "slis", "slitron", "sloave", "slob", "slog", "slolund", "slom", "slong",
    "slooze", "slorsnat", "sloss", "slotoask", "sloug", "slove", "sloyze", "sloze",
    "sluairn", "slunt", "slurd", "slusoove", "slut", "sluvize", "smag", "smail",
    "smajosp", "smal", "sman", "smasp", "smautnip", "smayst", "smearn", "smecris",
    "smed", "smeeb", "smeg", "smeir", "smelm", "smemuk", "smenkeax", "smep",
    "smerd", "smes", "smieze", "smilaurl", "smimscur", "smirm", "smist", "smitoyrl",
    "smoamp", "smolt", "smonnand", "smoong", "smorn", "smosab", "smotneth", "smouok",
    "smoyp", "smug", "smumspag", "smurt", "smusayn", "smuthamp", "smuve", "smux",
    "snahint", "snaisp", "snald", "snank", "snark", "snass", "snath", "snautaik",
    "snax", "snaysauk", "sneateep", "sned", "sneeaurt", "sneff", "sneip", "snel",
    "snemp", "sneng", "snert", "snesp", "sneteash", "sneu", "sneze", "snierd",
    "snilm", "sninolm", "snirt", "sniss", "snoalm", "snomeirp", "snoont", "snortint",
    "snos", "snoth", "snoun", "snox", "snoyrt", "snub", "snuk", "snumoati",
    "snun", "snurl", "snustayp", "snut", "soack", "soant", "soap", "soarsaix",
    "soask", "soat", "sold", "solmoyss", "someild", "soob", "soock", "sool",
    "soomcrai", "soong", "soort", "soost", "sooth", "sork", "sorm", "soroang",
    "sotstard", "souck", "soud", "soug", "soulm", "soumisp", "soun", "souroyld",
    "souss", "south", "soux", "soyb", "soyff", "soyloysp", "soynyorp", "soyp",
    "soyrl", "soyss", "soytain", "spaive", "spalfenk", "spam", "spanshax", "sparent",
    "spatflek", "spaulk", "spaylt", "spealk", "specosk", "speel", "speinub", "spelt",
    "spemeck", "spend", "spep", "spert", "spesk", "spiem", "spig", "spilm",
    "spin", "spirp", "spisays", "spitoyng", "spize", "splauff", "splep", "splielk",
    "sploaze", "splud", "spoask", "spokiesp", "spolair", "spom", "sponieve", "spoox",
    "sporn", "sposh", "spot", "spounk", "spoynce", "spoze", "spraint", "spream",
    "spriek", "sprorp", "sprush", "spuck", "spuld", "spunhass", "spup", "spurp",
    "sput", "staaig", "staealt", "stag", "staild", "stak", "stalk", "stareamp",
    "stasp", "staulk", "stayrk", "steass", "steesp", "steis", "stek", "stelk",
    "stence", "sterand", "stesoal", "stetoux", "stick", "stid", "stiesk", "stil",
    "stimwhab", "stirjarn", "stith", "stoax", "stock", "stoemush", "stog", "stolm",
    "stomoath", "stong", "stoop", "storiest", "stoszald", "stotchas", "stouck", "stoyx",
    "strauff", "streang", "strielp", "stroance", "strul", "stuboard", "stuff", "stulchup",
    "stun", "stuoag", "stup", "sturclie", "stutvurm", "stuze", "suheive", "sulboal",
    "suld", "suleest", "sulkailp", "sulolk", "sulp", "sumdras", "sundoamp", "suroack",
    "suskaynt", "sutaiuff", "sutealp", "suthrup", "sutmoan", "swab", "swaff", "swairn",
    "swal", "swamp", "swanurd", "swart", "swass", "swat", "swauth", "swax",
    "swayn", "swaze", "sweand", "sweerl", "sweilm", "swekit", "swelaynd", "swemurd",
    "swenont", "sweoove", "swern", "swesod", "swex", "swiay", "swib", "swick",
    "swid", "swier", "swig", "swilau", "swimp", "swinent", "swirjayp", "swisarn",
    "swithulk", "swoamp", "swod", "swok", "swold", "swomusk", "swoooag", "swosdee",
    "swot", "swourn", "swoyrl", "swuck", "swuiesk", "swulaylk", "swund", "swurn",
    "swush", "swutausp", "swuve", "taick", "taid", "tailp", "taimp", "taint",
    "taioul", "tairk", "taisoyd", "taitbeil", "tamcromp", "tannayve", "tanzilp", "tarl",
    "tarsweff", "tasdayl", "tash", "tasslurl", "tast", "taub", "tauieb", "taulut",
    "taunk", "taup", "taurt", "tausork", "tautpoub", "tauuld", "tayfeax", "taylblot",
    "taymmoob", "tayrp", "taysp", "tayteirl", "tayx", "tayze", "tead", "tealk",
    "team", "teanhosk", "teard", "teasp", "teatord", "teave", "teaze", "teck",
    "teelpun", "teem", "teen", "teeoag", "teerunce", "teescert", "teff", "teick",
    "teil", "teimp", "teindeeb", "teioand", "teisilt", "teize", "telt", "tend",
    "tergrayt", "terkieze", "terniaym", "terp", "tertoyve", "teth", "tetshalp", "teve",
    "thag", "thahayld", "thaint", "thak", "thamaylk", "thar", "thast", "thath",
    "thaurd", "thayx", "thealp", "theck", "theeausp", "theick", "thelush", "themoond",
    "thend", "therd", "thet", "theve", "thib", "thiep", "thiltayt", "thimp",
    "think", "thip", "third", "thiskein", "thitfes", "thive", "thiza", "thoarl",
    "thocreix", "thofrook", "tholswan", "thontask", "thoold", "thork", "thosskis", "thoth",
    "thourt", "thoyr", "thoze", "thraun", "thretoag", "thrierd", "throalt", "thrup",
    "thub", "thug", "thuk", "thulourm", "thumeamp", "thung", "thusp", "thuth",
    "thux", "tieaylt", "tiebain", "tielesp", "tiemjaux", "tienk", "tiep", "tiert",
    "tieswirm", "tiet", "tiff", "tijousk", "tilieck", "tilm", "tilp", "tilt",
    "timieth", "tind", "ting", "tinnast", "tinoock", "tinraus", "tiraosp", "tirbalp",
    "tird", "tirkaynt", "tirm", "tirnoort", "tirp", "tirspend", "tishoyg", "titiet",
    "titnork", "tize", "toaauss", "toab", "toad", "toainvor", "toald", "toanaump",
    "toark", "toasp", "toatwieg", "toax", "tolk", "tolshoak", "tomlouve", "tonhik",
    "tonk", "toob", "toock", "tooet", "tooieze", "toonk", "tooroyst", "tooss",
    "tootaup", "toove", "tooze", "torstoog", "tosjirk", "tosp", "toss", "totbeern",
    "toub", "toufeemp", "touimp", "toukouze", "toult", "toumolk", "tound", "tourkank",
    "tousp", "toutvind", "toyd", "toylvoan", "toyp", "toyrt", "toysk", "toytimp",
    "toze", "track", "trag", "train", "tralm", "tramoosp", "tranzous", "trap",
    "trareart", "trass", "tratoyld", "traurn", "trayk", "treash", "trees", "treg",
    "treish", "trelm", "tremeeng", "trenilk", "trerm", "tress", "treteip", "trick",
    "trieiep", "triiemik", "trilaild", "trim", "trin", "trip", "trirt", "trisoag",
    "trith", "trive", "troaoost", "trob", "trofount", "trolun", "tromp", "trond",
    "troold", "trorn", "trouze", "troymoth", "truait", "trulp", "trumulp", "trunang",
    "trush", "trut", "tuck", "tulk", "tump", "tund", "tuneerd", "tunk",
    "tureff", "turisp", "tuslayng", "tuss", "tutbaik", "tutro", "vaib", "vaiff",
    "vaik", "vailk", "vaim", "vaing", "vaireeld", "vais", "vaiuve", "vald",
    "valkayst", "valskol", "valwon", "vamcroor", "vaming", "vamp", "vanscorp", "varath",
    "vareeld", "varoand", "varp", "varqueek", "vart", "vasprux", "vath", "vatoosh",
    "vauff", "vault", "vaumorl", "vaunk", "vaurl", "vausance", "vaylurt", "vaynd",
    "vayrp", "vayss", "veaayb", "veaeam", "veamierp", "veank", "vearp", "veaseld",
    "veax", "veaze", "veck", "veearn", "veeb", "veelp", "veenzirn", "veep",
    "veerock", "veeskei", "veick", "veid", "veiff", "veilisk", "veimuze", "veint",
    "veirk", "veisk", "veit", "veix", "veize", "velork", "velp", "velsmunk",
    "velt", "vepayng", "verd", "vereve", "verl", "verm", "veroald", "veseart",
    "vesnield", "vetayss", "veze", "vichier", "vieeith", "viel", "vience", "vierl",
    "viesk", "vietnaum", "viewhond", "viex", "viirl", "vilt", "vimeeth", "vimjort",
    "vimp", "vince", "vind", "virl", "virp", "vitize", "vive", "voab",
    "voad", "voang", "voaronce", "voast", "voataus", "voax", "vodeze", "voeave",
    "voldeamp", "volourd", "vomosved", "vond", "vonoong", "vooff", "voomayff", "voond",
    "vooroosp", "voosk", "vootskot", "vord", "voreasp", "vosh", "vosk", "vost",
    "vosug", "voth", "votkuss", "voueaff", "voug", "voulm", "vound", "voup",
    "vourk", "vousyeid", "voutlosk", "vouve", "voyarn", "voyb", "voyld", "voymaylk",
    "voynce", "voyoan", "voyrkold", "voytoyss", "vuck", "vullork", "vumwash", "vuneax",
    "vunfeen", "vunoulp", "vuoyd", "vuraind", "vurm", "vurplail", "vuscard", "vutgraut",
    "vutmusp", "vuuze", "waick", "wailp", "waim", "waink", "wairp", "wais",
    "waix", "walm", "walquiex", "wamniert", "wamp", "wank", "wanorn", "want",
    "wapreesk", "warkeilk", "warm", "wartild", "wasdrout", "wassnarn", "wast", "watjiep",
    "watquoyl", "watwheur", "wauck", "wauff", "wauhou", "waulgup", "waumaut", "waunce",
    "waup", "waurm", "wausk", "wautsoyg", "wauze", "wave", "wayd", "wayg",
    "waylchux", "waym", "wayn", "waysh", "waytgord", "waze", "weadalm", "weak",
    "wealt", "weamp", "weaneeg", "weard", "weash", "weat", "weax", "weeck",
    "weeg", "weel", "weep", "weerk", "weesemp", "weeze", "wefayr", "weib",
    "weik", "weilfuk", "weimal", "weink", "weires", "weisk", "weith", "weivoalk",
    "weix", "welaur", "welm", "wemayk", "wemeer", "wereer", "werk", "wersnent",
    "wesmag", "whadounk", "whag", "whaid", "whaloulk", "whance", "wharurp", "whaseaff",
    "whausp", "whave", "whayern", "wheald", "wheb", "wheeg", "wheirp", "whelm",
    "whemsnel", "whenk", "whert", "whieunce", "whikearm", "whild", "whimeim", "whinath",
    "whirt", "whisk", "whitblum", "whix", "whoanoar", "whob", "whock", "wholix",
    "whomnair", "whonoss", "whoomp", "whork", "whosk", "whotoomp", "whouloob", "whowoask",
    "whoyscee", "whuld", "whum", "whung", "whurp", "whush", "whutig", "whuve",
    "wick", "wieck", "wiek", "wienayd", "wiereath", "wies", "wiet", "wimweirt",
    "wint", "wiraroom", "wird", "wiroorl", "wirt", "wisaig", "wiseliel", "wiskausk",
    "wiszauve", "woab", "woad", "woaloun", "woambilt", "woanzaub", "woarl", "woast",
    "woatchos", "woaymp", "wold", "wolm", "wolt", "womalk", "womp", "wooaul",
    "woob", "wookoand", "woolour", "woomoyth", "woont", "woor", "woosp", "woot",
    "wooze", "word", "worgrug", "worl", "wosh", "wost", "wouff", "woulp",
    "wounk", "woup", "wourn", "wouss", "wove", "woyck", "woyeeb", "woylslip",
    "woymarp", "woynce", "woyrp", "woys", "woytoyld", "woyze", "wuap", "wuck",
    "wuff", "wuld", "wulscieb", "wumoylp", "wumvep", "wunbuk", "wund", "wurk",
    "wusnest", "wusp", "wutfounk", "yack", "yadeelk", "yaielk", "yaig", "yailk",
    "yaink", "yairk", "yaitoaze", "yamsnoss", "yance", "yanprult", "yarn", "yarpim",
    "yasjauze", "yask", "yassounk", "yateimp", "yatoyth", "yaug", "yauk", "yaumauss",
    "yaun", "yaurl", "yausjeap", "yautpoup", "yaux", "yauze", "yawhauth", "yaylt",
    "yaym", "yaynce", "yayrp", "yaysp", "yaytoax", "yayvoar", "yaze", "yealskau",
    "yean", "yeardosh", "yeaszook", "yeatil", "yeave", "yeayr", "yeaze", "yecoysh",
    "yeeb", "yeeck", "yeelk", "yeem", "yeen", "yeeould", "yeesp", "yeetneig",
    "yeff", "yeianeal", "yeig", "yeilm", "yeinounk", "yeip", "yeirl", "yeisort",
    "yeit", "yeix", "yelince", "yelm", "yelveeg", "yemdeang", "yemvonce", "yernoulk",
    "yeroyrl", "yerp", "yerud", "yesci", "yetwaze", "yick", "yieck", "yiedeff",
    "yieielm", "yiek", "yiel", "yieng", "yiern", "yiesoyud", "yihoaik", "yilem",
    "yilp", "yime", "yind", "yird", "yirl", "yiseal", "yisglolm", "yisk",
    "yisspiet", "yith", "yize", "yoad", "yoal", "yoamayth", "yoan", "yoaoan",
    "yoap", "yoarn", "yoax", "yoaze", "yoead", "yoff", "yolsoys", "yolyourn",
    "yonayss", "yonk", "yonnince", "yoob", "yood", "yoolt", "yoomar", "yoong",
    "yoord", "yoosh", "yootaith", "yoox", "yord", "yorm", "yorp", "yort",
    "yorzoalk", "yosaayss", "yost", "youb", "youd", "youeemp", "youff", "youlflap",
    "youngig", "yourairk", "yousp", "youth", "youze", "yoyb", "yoyg", "yoyk",
    "yoyl", "yoymayp", "yoyniesk", "yoyp", "yoyreeve", "yoyss", "yoyt", "yoyx",
    "yoyze", "yudrear", "yuff", "yumwald", "yunhirl", "yunwirn", "yurgaim", "yurn",
    "yurp", "yurt", "yust", "yusvoorm", "yutauze", "yutgiesk", "zaiff", "zaig",
    "zaik", "zainouk", "zairn", "zais", "zaitaid", "zalk", "zalpault", "zalsasp",
    "zamsove", "zanoamp", "zark", "zarl", "zarp", "zasasaib", "zasleep", "zasp",
    "zasteimp", "zatesk", "zatoox", "zatul", "zauck", "zaulp", "zaump", "zaurk",
    "zausp", "zautoyld", "zayb", "zaylk", "zaynarm", "zayrl", "zaysoul", "zaytesk",
    "zaze", "zeaff", "zealk", "zeart", "zeasp", "zeath", "zeauss", "zeave",
    "zeawat", "zeax", "zeed", "zeeff", "zeelaurm", "zeend", "zeern", "zeest",
    "zeeteant", "zeeze", "zeff", "zeigloy", "zeiluth", "zeimlisp", "zein", "zeirp",
    "zeisp", "zeix", "zeld", "zelgrast", "zelkiek", "zemskail", "zence", "zest",
    "zetfloot", "ziaumeng", "zichaip", "zielp", "zienairm", "ziep", "zier", "ziet",
    "zimzoolk", "zing", "zinswoom", "zinterl", "zioag", "zird", "zirk", "zirm",
    "zisboasp", "zisfeep", "zish", "zisk", "zoaairn", "zoabuze", "zoack", "zoaff",
    "zoag", "zoalk", "zoamjiep", "zoance", "zoard", "zoasild", "zoatswol", "zoayesk",
    "zolm", "zoloynk", "zolsnea", "zomaurm", "zoob", "zoolailt", "zoonsayn", "zoorm",
    "zoot", "zosurp", "zotousp", "zoub", "zougrai", "zoumid", "zound", "zouoo",
    "zourm", "zouss", "zouteelm", "zove", "zoyblis", "zoyd", "zoyeix", "zoylk",
    "zoymayrn", "zoynoad", "zoyrp", "zoyth", "zulbre", "zuld", "zumairk", "zumfourm",
    "zunk", "zurerd", "zurm", "zurouth", "zusp", "zutbrant", "zutdeab", "zuze",
];
