/*!
# Command Reference

In the stack pictures the top is on the right. `a` is the top value and
`b` the one below it.

| Input      | Stack            | Meaning                                   |
|------------|------------------|-------------------------------------------|
| `+`        | `b a -- b+a`     | Sum                                       |
| `-`        | `b a -- b-a`     | Difference                                |
| `*`        | `b a -- b*a`     | Product                                   |
| `/`        | `b a -- b/a`     | Quotient                                  |
| `\pow`     | `b a -- b^a`     | Power                                     |
| `1/`       | `a -- 1/a`       | Reciprocal                                |
| `!!`       | `a -- a a`       | Duplicate the top                         |
| `\drop`    | `a --`           | Discard the top                           |
| `\swap`    | `b a -- a b`     | Exchange the top two values               |
| `\roll`    | `x ... a -- ... a x` | Move the oldest value to the top      |
| `\clear`   | `... --`         | Empty the stack                           |
| `[n]`      | `-- v`           | Copy value `n` onto the top (see below)   |
| `\aliases` |                  | List every name as `name=body`            |
| `\exit`    |                  | Leave calc                                |

## Functions

Each takes the top value and replaces it with the result. `\log` is the
natural logarithm.

`\sqrt` `\cbrt` `\sin` `\cos` `\tan` `\asin` `\acos` `\atan` `\sinh`
`\cosh` `\tanh` `\asinh` `\acosh` `\atanh` `\log` `\log2` `\log10` `\exp`

Results outside a function's domain are not errors. `-1;\sqrt` pushes
`NaN` and `1;0;/` pushes `inf`.

## Indexing

`[expr]` evaluates `expr`, pops the result and rounds it. `[0]` is the
oldest value, `[1]` the next. Negative numbers count from the top, so
`[-1]` duplicates the top. An index outside the stack is an error.

## Names

| Input          | Effect                                              |
|----------------|-----------------------------------------------------|
| `n=text`       | `n` stands for `text`, everything up to line end     |
| `n=(text);...` | `n` stands for `text`; the rest of the line runs     |
| `n={expr};...` | runs `expr`, pops the top and `n` stands for it      |
| `n=`           | forgets `n`                                          |

A name only matches a whole statement. A name may refer to other names,
and bodies may hold `[]` or `{}` expressions, up to 256 levels deep. Going
deeper is stopped with an error. Statements separated by `;` do not add a
level, so a line or a body can hold any number of them.

*/
